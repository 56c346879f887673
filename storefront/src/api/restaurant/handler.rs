//! Restaurant API Handlers

use axum::{Json, extract::State};
use shared::models::{RestaurantInfo, TimeSlot};

use crate::core::ServerState;
use crate::utils::{ApiResponse, ok};

/// GET /api/restaurant
pub async fn info(State(state): State<ServerState>) -> Json<ApiResponse<RestaurantInfo>> {
    ok(state.catalog.restaurant().clone())
}

/// GET /api/time-slots
pub async fn time_slots() -> Json<ApiResponse<Vec<TimeSlot>>> {
    ok(TimeSlot::all())
}
