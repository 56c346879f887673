//! Delivery checkout Handlers
//!
//! Lock order: flow first, then cart. Every entry point except `back` and
//! `submit` restarts a placed order once the cart has been refilled.

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::models::{DeliveryInfo, DeliveryPaymentMethod};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::flows::delivery::ORDER_PLACED;
use crate::flows::{DeliveryConfirmation, DeliveryFlow, DeliveryView};
use crate::utils::{ApiResponse, AppResult, ok, ok_with_message};

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub method: DeliveryPaymentMethod,
}

/// GET /api/order-online
pub async fn view(State(state): State<ServerState>) -> Json<ApiResponse<DeliveryView>> {
    let mut flow = state.delivery.lock();
    let cart = state.cart.lock();
    flow.enter(&cart);
    ok(flow.view(&cart))
}

/// DELETE /api/order-online
pub async fn reset(State(state): State<ServerState>) -> Json<ApiResponse<DeliveryView>> {
    let mut flow = state.delivery.lock();
    *flow = DeliveryFlow::new();
    let cart = state.cart.lock();
    ok(flow.view(&cart))
}

/// PUT /api/order-online/details
pub async fn update_details(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<DeliveryInfo>,
) -> AppResult<Json<ApiResponse<DeliveryView>>> {
    let mut flow = state.delivery.lock();
    let cart = state.cart.lock();
    flow.enter(&cart);
    flow.update_details(payload)?;
    Ok(ok(flow.view(&cart)))
}

/// PUT /api/order-online/payment
pub async fn select_payment(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<PaymentRequest>,
) -> AppResult<Json<ApiResponse<DeliveryView>>> {
    let mut flow = state.delivery.lock();
    let cart = state.cart.lock();
    flow.enter(&cart);
    flow.select_payment(payload.method)?;
    Ok(ok(flow.view(&cart)))
}

/// POST /api/order-online/continue
pub async fn proceed(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<DeliveryView>>> {
    let mut flow = state.delivery.lock();
    let cart = state.cart.lock();
    flow.enter(&cart);
    flow.proceed(&cart)?;
    Ok(ok(flow.view(&cart)))
}

/// POST /api/order-online/back
pub async fn back(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<DeliveryView>>> {
    let mut flow = state.delivery.lock();
    flow.back()?;
    let cart = state.cart.lock();
    Ok(ok(flow.view(&cart)))
}

/// POST /api/order-online/submit
pub async fn submit(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<DeliveryConfirmation>>> {
    let mut flow = state.delivery.lock();
    let mut cart = state.cart.lock();
    let confirmation = flow.submit(&mut cart)?;
    Ok(ok_with_message(confirmation, ORDER_PLACED))
}
