//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuCategory, MenuItem};

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult, ErrorCode, ok};

/// GET /api/menu
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<MenuCategory>>> {
    ok(state.catalog.categories().to_vec())
}

/// GET /api/menu/popular
pub async fn popular(State(state): State<ServerState>) -> Json<ApiResponse<Vec<MenuItem>>> {
    ok(state
        .catalog
        .list_popular_items()
        .into_iter()
        .cloned()
        .collect())
}

/// GET /api/menu/categories/{id}
pub async fn get_category(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuCategory>>> {
    let category = state.catalog.category(&id).cloned().ok_or_else(|| {
        AppError::with_message(
            ErrorCode::CategoryNotFound,
            format!("Category not found: {}", id),
        )
        .with_detail("category_id", id.clone())
    })?;
    Ok(ok(category))
}

/// GET /api/menu/items/{id}
pub async fn get_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let item = crate::api::find_menu_item(&state, &id)?;
    Ok(ok(item))
}
