//! Cart API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/cart | GET | cart snapshot |
//! | /api/cart | DELETE | clear the cart |
//! | /api/cart/items | POST | add one unit of a menu item, opens the drawer |
//! | /api/cart/items/{id} | PUT | set quantity (at least 1) |
//! | /api/cart/items/{id} | DELETE | remove a line |
//! | /api/cart/open | PUT | show / hide the drawer |
//! | /api/cart/badge | GET | header badge |
//! | /api/cart/drawer | GET | drawer contents |
//! | /api/cart/drawer | POST | apply a drawer action |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).delete(handler::clear))
        .route("/items", post(handler::add_item))
        .route(
            "/items/{id}",
            put(handler::update_quantity).delete(handler::remove_item),
        )
        .route("/open", put(handler::set_open))
        .route("/badge", get(handler::badge))
        .route("/drawer", get(handler::drawer).post(handler::drawer_action))
}
