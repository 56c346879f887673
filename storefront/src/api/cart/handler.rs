//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::CartSnapshot;

use crate::cart::{self, CartBadge, CartDrawer, DrawerAction};
use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Menu item id
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetOpenRequest {
    pub open: bool,
}

#[derive(Debug, Serialize)]
pub struct DrawerActionResponse {
    /// Page to navigate to, if any
    pub navigate: Option<&'static str>,
    pub drawer: CartDrawer,
}

/// GET /api/cart
pub async fn get(State(state): State<ServerState>) -> Json<ApiResponse<CartSnapshot>> {
    ok(state.cart.lock().snapshot())
}

/// DELETE /api/cart
pub async fn clear(State(state): State<ServerState>) -> Json<ApiResponse<CartSnapshot>> {
    let mut cart = state.cart.lock();
    cart.clear_cart();
    ok(cart.snapshot())
}

/// POST /api/cart/items
pub async fn add_item(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<AddItemRequest>,
) -> AppResult<Json<ApiResponse<CartSnapshot>>> {
    let item = crate::api::find_menu_item(&state, &payload.id)?;
    let mut cart = state.cart.lock();
    cart::add_to_cart(&mut cart, &item);
    Ok(ok(cart.snapshot()))
}

/// PUT /api/cart/items/{id}
pub async fn update_quantity(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateQuantityRequest>,
) -> Json<ApiResponse<CartSnapshot>> {
    let mut cart = state.cart.lock();
    cart.update_quantity(&id, payload.quantity);
    ok(cart.snapshot())
}

/// DELETE /api/cart/items/{id}
pub async fn remove_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<CartSnapshot>> {
    let mut cart = state.cart.lock();
    cart.remove_item(&id);
    ok(cart.snapshot())
}

/// PUT /api/cart/open
pub async fn set_open(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<SetOpenRequest>,
) -> Json<ApiResponse<CartSnapshot>> {
    let mut cart = state.cart.lock();
    cart.set_is_open(payload.open);
    ok(cart.snapshot())
}

/// GET /api/cart/badge
pub async fn badge(State(state): State<ServerState>) -> Json<ApiResponse<CartBadge>> {
    ok(CartBadge::from_store(&state.cart.lock()))
}

/// GET /api/cart/drawer
pub async fn drawer(State(state): State<ServerState>) -> Json<ApiResponse<CartDrawer>> {
    ok(CartDrawer::from_store(&state.cart.lock()))
}

/// POST /api/cart/drawer
pub async fn drawer_action(
    State(state): State<ServerState>,
    ApiJson(action): ApiJson<DrawerAction>,
) -> Json<ApiResponse<DrawerActionResponse>> {
    // Checkout opens the delivery page, so the delivery lock comes first
    let mut delivery = matches!(action, DrawerAction::Checkout).then(|| state.delivery.lock());
    let mut cart = state.cart.lock();
    let navigation = cart::apply_drawer_action(&mut cart, &action);
    if let Some(flow) = delivery.as_mut() {
        flow.enter(&cart);
    }
    ok(DrawerActionResponse {
        navigate: navigation.path(),
        drawer: CartDrawer::from_store(&cart),
    })
}
