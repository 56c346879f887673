//! API route modules
//!
//! - [`health`] - liveness
//! - [`restaurant`] - restaurant info and booking time slots
//! - [`menu`] - catalog browsing
//! - [`cart`] - cart store, badge and drawer
//! - [`order_online`] - delivery checkout
//! - [`pre_order`] - pre-order checkout
//! - [`book_table`] - table booking
//! - [`auth`] - sign in / sign up

pub mod auth;
pub mod book_table;
pub mod cart;
pub mod health;
pub mod menu;
pub mod order_online;
pub mod pre_order;
pub mod restaurant;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::flows::FlowError;
use crate::utils::AppResult;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppError};

/// Look up a catalog item, 404 if unknown
pub(crate) fn find_menu_item(state: &ServerState, id: &str) -> AppResult<MenuItem> {
    state
        .catalog
        .get_item_by_id(id)
        .cloned()
        .ok_or_else(|| FlowError::ItemNotFound(id.to_string()).into())
}

/// JSON body extractor whose rejection is the standard error envelope
///
/// Malformed bodies come back as `InvalidRequest` instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Unknown routes get the same envelope as every other error
pub(crate) async fn not_found(uri: http::Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
