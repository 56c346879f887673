//! Cart presentation: header badge and slide-in drawer

use serde::{Deserialize, Serialize};
use shared::models::{CartLineItem, MenuItem};

use super::CartStore;

/// Header badge; hidden while the cart is empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartBadge {
    pub count: u32,
    pub visible: bool,
}

impl CartBadge {
    pub fn from_store(cart: &CartStore) -> Self {
        let count = cart.total_items();
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// Drawer contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartDrawer {
    pub is_open: bool,
    /// True when the "your cart is empty" view is shown
    pub is_empty: bool,
    pub items: Vec<CartLineItem>,
    pub total_items: u32,
    pub total_price: f64,
}

impl CartDrawer {
    pub fn from_store(cart: &CartStore) -> Self {
        Self {
            is_open: cart.is_open(),
            is_empty: cart.is_empty(),
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// User action inside the drawer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum DrawerAction {
    Increment { id: String },
    /// Never drops a line below 1
    Decrement { id: String },
    Remove { id: String },
    ClearAll,
    Checkout,
    ContinueShopping,
    Close,
}

/// Where the user ends up after a drawer action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Navigation {
    Stay,
    Menu,
    OrderOnline,
}

impl Navigation {
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Stay => None,
            Self::Menu => Some("/menu"),
            Self::OrderOnline => Some("/order-online"),
        }
    }
}

/// Add-to-cart button: adds one unit and opens the drawer
pub fn add_to_cart(cart: &mut CartStore, item: &MenuItem) {
    cart.add_item(item);
    cart.set_is_open(true);
}

/// Apply a drawer action to the store
pub fn apply_drawer_action(cart: &mut CartStore, action: &DrawerAction) -> Navigation {
    match action {
        DrawerAction::Increment { id } => {
            if let Some(q) = cart.get(id).map(|l| l.quantity) {
                cart.update_quantity(id, i64::from(q) + 1);
            }
            Navigation::Stay
        }
        DrawerAction::Decrement { id } => {
            if let Some(q) = cart.get(id).map(|l| l.quantity) {
                cart.update_quantity(id, i64::from(q) - 1);
            }
            Navigation::Stay
        }
        DrawerAction::Remove { id } => {
            cart.remove_item(id);
            Navigation::Stay
        }
        DrawerAction::ClearAll => {
            cart.clear_cart();
            Navigation::Stay
        }
        DrawerAction::Checkout => {
            cart.set_is_open(false);
            Navigation::OrderOnline
        }
        DrawerAction::ContinueShopping => {
            cart.set_is_open(false);
            Navigation::Menu
        }
        DrawerAction::Close => {
            cart.set_is_open(false);
            Navigation::Stay
        }
    }
}
