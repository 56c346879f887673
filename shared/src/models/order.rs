//! Order Model
//!
//! Delivery details, pre-order selections and payment choices.

use serde::{Deserialize, Serialize};

use super::menu::MenuItem;

/// Pre-order line item
///
/// Tracked by the pre-order flow only; never shared with the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl OrderItem {
    /// New selection line with quantity 1
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }
}

/// Priced line as shown on a confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// Delivery details (step 1 of the delivery flow)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    /// Special instructions (optional)
    #[serde(default)]
    pub notes: String,
}

/// Delivery payment choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryPaymentMethod {
    #[default]
    CashOnDelivery,
    /// Placeholder ("Coming soon")
    Online,
}

impl DeliveryPaymentMethod {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::CashOnDelivery)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::Online => "Pay Online",
        }
    }
}

/// Pre-order payment choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreOrderPaymentMethod {
    #[default]
    PayAtRestaurant,
    /// Placeholder ("Coming soon")
    PayOnline,
}

impl PreOrderPaymentMethod {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::PayAtRestaurant)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PayAtRestaurant => "Pay at Restaurant",
            Self::PayOnline => "Paid Online",
        }
    }
}
