//! Restaurant info API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/restaurant | GET | name, address, contact, hours, features |
//! | /api/time-slots | GET | bookable time slots |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/restaurant", get(handler::info))
        .route("/api/time-slots", get(handler::time_slots))
}
