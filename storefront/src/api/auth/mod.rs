//! Auth API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/auth/session | GET | current session or null |
//! | /api/auth/oauth | POST | sign in with a third-party provider |
//! | /api/auth/login | POST | email + password sign-in |
//! | /api/auth/signup | POST | email + password sign-up |
//! | /api/auth/logout | POST | sign out |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/session", get(handler::session))
        .route("/oauth", post(handler::oauth))
        .route("/login", post(handler::login))
        .route("/signup", post(handler::signup))
        .route("/logout", post(handler::logout))
}
