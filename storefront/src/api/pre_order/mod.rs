//! Pre-order checkout API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/pre-order | GET | current view |
//! | /api/pre-order | DELETE | abandon and start over |
//! | /api/pre-order/schedule | PUT | booking ref, date, time |
//! | /api/pre-order/items | POST | add a menu item to the selection |
//! | /api/pre-order/items/{id}/adjust | POST | change quantity by a delta |
//! | /api/pre-order/items/{id} | DELETE | drop a line |
//! | /api/pre-order/payment | PUT | payment method |
//! | /api/pre-order/continue | POST | next step |
//! | /api/pre-order/back | POST | previous step |
//! | /api/pre-order/submit | POST | submit the pre-order |
//!
//! The selection is separate from the cart.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pre-order", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view).delete(handler::reset))
        .route("/schedule", put(handler::update_schedule))
        .route("/items", post(handler::add_item))
        .route("/items/{id}/adjust", post(handler::adjust_quantity))
        .route("/items/{id}", delete(handler::remove_item))
        .route("/payment", put(handler::select_payment))
        .route("/continue", post(handler::proceed))
        .route("/back", post(handler::back))
        .route("/submit", post(handler::submit))
}
