//! Restaurant Info Model

use serde::{Deserialize, Serialize};

/// Restaurant profile shown on the home, contact and booking pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: Address,
    pub contact: Contact,
    pub social: SocialLinks,
    /// Display rows in week order, Monday first
    pub hours: Vec<OpeningHours>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    /// "123 Gourmet Avenue, Downtown, CA 90210"
    pub fn one_line(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    /// Digits with leading '+', used for the wa.me link
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub twitter: String,
}

/// One row of the opening hours table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    /// "5:00 PM - 10:00 PM" or "Closed"
    pub hours: String,
}

impl OpeningHours {
    pub fn is_closed(&self) -> bool {
        self.hours.eq_ignore_ascii_case("closed")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}
