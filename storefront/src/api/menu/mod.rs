//! Menu API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/menu | GET | all categories with their items |
//! | /api/menu/popular | GET | items flagged popular, in menu order |
//! | /api/menu/categories/{id} | GET | one category |
//! | /api/menu/items/{id} | GET | one item |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/popular", get(handler::popular))
        .route("/categories/{id}", get(handler::get_category))
        .route("/items/{id}", get(handler::get_item))
}
