//! Table booking API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/book-table | GET | form or confirmation |
//! | /api/book-table | PUT | update the form |
//! | /api/book-table/submit | POST | submit the booking request |
//! | /api/book-table/reset | POST | back to the form after a confirmation |
//! | /api/book-table/whatsapp | GET | WhatsApp link for the current form |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/book-table", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view).put(handler::update_form))
        .route("/submit", post(handler::submit))
        .route("/reset", post(handler::reset))
        .route("/whatsapp", get(handler::whatsapp))
}
