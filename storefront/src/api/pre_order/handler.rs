//! Pre-order Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::PreOrderPaymentMethod;

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::flows::pre_order::{PRE_ORDER_SUBMITTED, PreOrderSchedule};
use crate::flows::{PreOrderConfirmation, PreOrderFlow, PreOrderView};
use crate::utils::{ApiResponse, AppResult, ok, ok_with_message};

type ViewResult = AppResult<Json<ApiResponse<PreOrderView>>>;

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Menu item id
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    /// +1 / -1 from the stepper buttons
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub method: PreOrderPaymentMethod,
}

/// GET /api/pre-order
pub async fn view(State(state): State<ServerState>) -> Json<ApiResponse<PreOrderView>> {
    ok(state.pre_order.lock().view())
}

/// DELETE /api/pre-order
pub async fn reset(State(state): State<ServerState>) -> Json<ApiResponse<PreOrderView>> {
    let mut flow = state.pre_order.lock();
    *flow = PreOrderFlow::new();
    ok(flow.view())
}

/// PUT /api/pre-order/schedule
pub async fn update_schedule(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PreOrderSchedule>,
) -> ViewResult {
    let mut flow = state.pre_order.lock();
    flow.update_schedule(payload)?;
    Ok(ok(flow.view()))
}

/// POST /api/pre-order/items
pub async fn add_item(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<AddItemRequest>,
) -> ViewResult {
    let item = crate::api::find_menu_item(&state, &payload.id)?;
    let mut flow = state.pre_order.lock();
    flow.add_item(&item)?;
    Ok(ok(flow.view()))
}

/// POST /api/pre-order/items/{id}/adjust
pub async fn adjust_quantity(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<AdjustRequest>,
) -> ViewResult {
    let mut flow = state.pre_order.lock();
    flow.adjust_quantity(&id, payload.delta)?;
    Ok(ok(flow.view()))
}

/// DELETE /api/pre-order/items/{id}
pub async fn remove_item(State(state): State<ServerState>, Path(id): Path<String>) -> ViewResult {
    let mut flow = state.pre_order.lock();
    flow.remove_item(&id)?;
    Ok(ok(flow.view()))
}

/// PUT /api/pre-order/payment
pub async fn select_payment(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PaymentRequest>,
) -> ViewResult {
    let mut flow = state.pre_order.lock();
    flow.select_payment(payload.method)?;
    Ok(ok(flow.view()))
}

/// POST /api/pre-order/continue
pub async fn proceed(State(state): State<ServerState>) -> ViewResult {
    let today = state.today();
    let mut flow = state.pre_order.lock();
    flow.proceed(today)?;
    Ok(ok(flow.view()))
}

/// POST /api/pre-order/back
pub async fn back(State(state): State<ServerState>) -> ViewResult {
    let mut flow = state.pre_order.lock();
    flow.back()?;
    Ok(ok(flow.view()))
}

/// POST /api/pre-order/submit
pub async fn submit(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<PreOrderConfirmation>>> {
    let today = state.today();
    let confirmation = state.pre_order.lock().submit(today)?;
    Ok(ok_with_message(confirmation, PRE_ORDER_SUBMITTED))
}
