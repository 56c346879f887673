//! Delivery checkout API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/order-online | GET | current view |
//! | /api/order-online | DELETE | abandon and start over |
//! | /api/order-online/details | PUT | name, phone, address, notes |
//! | /api/order-online/payment | PUT | payment method |
//! | /api/order-online/continue | POST | details → payment |
//! | /api/order-online/back | POST | payment → details |
//! | /api/order-online/submit | POST | place the order |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/order-online", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view).delete(handler::reset))
        .route("/details", put(handler::update_details))
        .route("/payment", put(handler::select_payment))
        .route("/continue", post(handler::proceed))
        .route("/back", post(handler::back))
        .route("/submit", post(handler::submit))
}
