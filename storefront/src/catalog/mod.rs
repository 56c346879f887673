//! Catalog - static, read-only menu and restaurant profile
//!
//! # Queries
//!
//! | Method | Result |
//! |--------|--------|
//! | [`Catalog::categories`] | all categories in display order |
//! | [`Catalog::category`] | one category by id |
//! | [`Catalog::category_items`] | items of one category (menu tab) |
//! | [`Catalog::get_item_by_id`] | first item with the id, across categories |
//! | [`Catalog::list_popular_items`] | popular items, category order then item order |

mod data;

use shared::models::{MenuCategory, MenuItem, RestaurantInfo};

/// Immutable menu + restaurant info
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
    restaurant: RestaurantInfo,
}

impl Catalog {
    pub fn new(categories: Vec<MenuCategory>, restaurant: RestaurantInfo) -> Self {
        Self {
            categories,
            restaurant,
        }
    }

    /// The Urban Plate menu
    pub fn urban_plate() -> Self {
        Self::new(data::menu(), data::restaurant_info())
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Items of one category, `None` for an unknown category
    pub fn category_items(&self, id: &str) -> Option<&[MenuItem]> {
        self.category(id).map(|c| c.items.as_slice())
    }

    pub fn get_item_by_id(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.id == id)
    }

    pub fn list_popular_items(&self) -> Vec<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|item| item.popular)
            .collect()
    }

    pub fn restaurant(&self) -> &RestaurantInfo {
        &self.restaurant
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::urban_plate()
    }
}
