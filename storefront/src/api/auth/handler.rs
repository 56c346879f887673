//! Auth API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::auth::{LoginForm, OAuthProvider, Session};
use crate::api::ApiJson;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok};

#[derive(Debug, Deserialize)]
pub struct OAuthRequest {
    pub provider: OAuthProvider,
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Option<Session>>>> {
    let session = state.auth.get_current_session().await?;
    Ok(ok(session))
}

/// POST /api/auth/oauth
pub async fn oauth(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OAuthRequest>,
) -> AppResult<Json<ApiResponse<Session>>> {
    let session = state.auth.sign_in_with_provider(payload.provider).await?;
    Ok(ok(session))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<LoginForm>,
) -> AppResult<Json<ApiResponse<Session>>> {
    let email = form.validate()?;
    let session = state.auth.sign_in_with_password(email, &form.password).await?;
    tracing::info!(user_id = %session.user.id, "User signed in");
    Ok(ok(session))
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<ServerState>,
    ApiJson(form): ApiJson<LoginForm>,
) -> AppResult<Json<ApiResponse<Session>>> {
    let email = form.validate()?;
    let session = state.auth.sign_up(email, &form.password).await?;
    tracing::info!(user_id = %session.user.id, "User signed up");
    Ok(ok(session))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ServerState>) -> AppResult<Json<ApiResponse<()>>> {
    state.auth.sign_out().await?;
    Ok(Json(ApiResponse::ok()))
}
