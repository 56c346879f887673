use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;

mod logging;

pub use logging::logging_middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (uuid v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health - liveness
        .merge(api::health::router())
        // Restaurant info and time slots
        .merge(api::restaurant::router())
        // Menu browsing
        .merge(api::menu::router())
        // Cart store, badge and drawer
        .merge(api::cart::router())
        // Checkout flows
        .merge(api::order_online::router())
        .merge(api::pre_order::router())
        .merge(api::book_table::router())
        // Sign in / sign up
        .merge(api::auth::router())
        .fallback(api::not_found)
}

/// Build a fully configured application with all middleware
///
/// Used by the HTTP server and by the in-process tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Requests slower than the configured limit get 408
        .layer(TimeoutLayer::new(state.config.request_timeout()))
        // Request logging
        .layer(axum_middleware::from_fn(logging_middleware))
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
}
