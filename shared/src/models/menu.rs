//! Menu Model

use serde::{Deserialize, Serialize};

/// Orderable menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable catalog identifier (e.g. "s1")
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in dollars
    pub price: f64,
    /// Vegetarian dietary flag
    pub is_veg: bool,
    /// Featured on the home page
    #[serde(default)]
    pub popular: bool,
}

/// Menu category (one tab on the menu page)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}
