//! Data Models
//!
//! Shared between the storefront server and any client that talks to it.

pub mod booking;
pub mod cart;
pub mod menu;
pub mod order;
pub mod restaurant;

pub use booking::{BookingForm, GuestCount, InvalidGuestCount, InvalidTimeSlot, TimeSlot};
pub use cart::{CartLineItem, CartSnapshot};
pub use menu::{MenuCategory, MenuItem};
pub use order::{
    DeliveryInfo, DeliveryPaymentMethod, OrderItem, PreOrderPaymentMethod, PricedLine,
};
pub use restaurant::{Address, Contact, Feature, OpeningHours, RestaurantInfo, SocialLinks};
