//! Server state
//!
//! One guest session lives in memory: the cart, the three checkout flows
//! and the auth provider. Every handler receives a clone of
//! [`ServerState`]; the inner values are shared.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::auth::{AuthProvider, MockAuthProvider};
use crate::cart::{CartStore, SharedCart};
use crate::catalog::Catalog;
use crate::core::Config;
use crate::flows::{BookingFlow, DeliveryFlow, PreOrderFlow};
use crate::utils::time;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub cart: SharedCart,
    pub delivery: Arc<Mutex<DeliveryFlow>>,
    pub pre_order: Arc<Mutex<PreOrderFlow>>,
    pub booking: Arc<Mutex<BookingFlow>>,
    pub auth: Arc<dyn AuthProvider>,
}

impl ServerState {
    /// Build state with the bundled catalog and the in-memory auth provider
    pub fn initialize(config: &Config) -> Self {
        let catalog = Catalog::urban_plate();
        tracing::info!(
            categories = catalog.categories().len(),
            popular = catalog.list_popular_items().len(),
            "Catalog loaded"
        );
        Self::with_parts(config.clone(), catalog, Arc::new(MockAuthProvider::new()))
    }

    pub fn with_parts(config: Config, catalog: Catalog, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            cart: CartStore::shared(),
            delivery: Arc::new(Mutex::new(DeliveryFlow::new())),
            pre_order: Arc::new(Mutex::new(PreOrderFlow::new())),
            booking: Arc::new(Mutex::new(BookingFlow::new())),
            auth,
        }
    }

    /// Today in the business timezone
    pub fn today(&self) -> NaiveDate {
        time::today(self.config.timezone)
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("cart_items", &self.cart.lock().total_items())
            .finish_non_exhaustive()
    }
}
