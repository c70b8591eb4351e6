//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /convert-text`, `/api/convert-text`, `/.netlify/functions/api/convert-text`
//!   - Text conversion
//! - `GET  /health` - Liveness check
//! - anything else  - 404 `{"error": "Route not found", "path": ...}`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, method and header
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// Used directly by tests; production wraps it with [`app_router`].
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::convert_routes())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
