//! Shared types for the Urban Plate storefront
//!
//! Error codes, API response structures and the data models exchanged
//! between the storefront server and its clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
