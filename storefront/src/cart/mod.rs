//! Cart Store
//!
//! Single source of truth for the shopping cart. Line items keep their
//! insertion order; totals are derived on every read.
//!
//! Consumers receive a [`SharedCart`] handle from the server state and
//! never reach the store through a global.

mod view;


use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::{CartLineItem, CartSnapshot, MenuItem};

use crate::money;

pub use view::{CartBadge, CartDrawer, DrawerAction, Navigation, add_to_cart, apply_drawer_action};

/// Maximum quantity per line
pub const MAX_QUANTITY: u32 = 9999;

/// Shared handle to the session's cart
pub type SharedCart = Arc<Mutex<CartStore>>;

/// Cart line items plus drawer visibility
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    is_open: bool,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new empty store in a [`SharedCart`]
    pub fn shared() -> SharedCart {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Add one unit of a catalog item
    ///
    /// An existing line is incremented; otherwise a new line is appended with
    /// name, price and veg flag copied from the item.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.items.iter_mut().find(|l| l.id == item.id) {
            line.quantity = (line.quantity + 1).min(MAX_QUANTITY);
            tracing::debug!(item_id = %item.id, quantity = line.quantity, "Cart line incremented");
            return;
        }
        self.items.push(CartLineItem::from_menu_item(item));
        tracing::debug!(item_id = %item.id, "Cart line added");
    }

    /// Set the quantity of a line
    ///
    /// Values below 1 store 1; the line is never removed through this path.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let Some(line) = self.items.iter_mut().find(|l| l.id == id) else {
            return;
        };
        line.quantity = quantity.clamp(1, MAX_QUANTITY as i64) as u32;
    }

    /// Remove a line; unknown ids are ignored
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|l| l.id != id);
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    pub fn set_is_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price × quantity`, exact to the cent
    pub fn total_price(&self) -> f64 {
        money::cart_total(&self.items)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
            is_open: self.is_open,
        }
    }
}
