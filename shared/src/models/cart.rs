//! Cart Model

use serde::{Deserialize, Serialize};

use super::menu::MenuItem;

/// One menu item plus a quantity, as held in the cart
///
/// `name`, `price` and `is_veg` are copied at add time; later catalog
/// changes do not reach existing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub is_veg: bool,
    /// Always >= 1
    pub quantity: u32,
}

impl CartLineItem {
    /// New line with quantity 1
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            is_veg: item.is_veg,
            quantity: 1,
        }
    }
}

/// Read-only view of the cart with derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub total_items: u32,
    pub total_price: f64,
    pub is_open: bool,
}
