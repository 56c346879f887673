//! Table booking Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::BookingForm;

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::flows::booking::BOOKING_SUBMITTED;
use crate::flows::{BookingConfirmation, BookingView};
use crate::utils::{ApiResponse, AppResult, ok, ok_with_message};

#[derive(Debug, Serialize)]
pub struct WhatsAppLink {
    pub url: String,
}

/// GET /api/book-table
pub async fn view(State(state): State<ServerState>) -> Json<ApiResponse<BookingView>> {
    let today = state.today();
    ok(state.booking.lock().view(today))
}

/// PUT /api/book-table
pub async fn update_form(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<BookingForm>,
) -> AppResult<Json<ApiResponse<BookingView>>> {
    let today = state.today();
    let mut flow = state.booking.lock();
    flow.update_form(payload)?;
    Ok(ok(flow.view(today)))
}

/// POST /api/book-table/submit
pub async fn submit(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<BookingConfirmation>>> {
    let today = state.today();
    let confirmation = state.booking.lock().submit(today)?;
    Ok(ok_with_message(confirmation, BOOKING_SUBMITTED))
}

/// POST /api/book-table/reset
pub async fn reset(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<BookingView>>> {
    let today = state.today();
    let mut flow = state.booking.lock();
    flow.reset()?;
    Ok(ok(flow.view(today)))
}

/// GET /api/book-table/whatsapp
pub async fn whatsapp(State(state): State<ServerState>) -> Json<ApiResponse<WhatsAppLink>> {
    let url = state
        .booking
        .lock()
        .whatsapp_link(&state.config.whatsapp_number);
    ok(WhatsAppLink { url })
}
