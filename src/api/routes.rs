//! API route configuration.

use crate::api::handlers::convert_text_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Paths serving the conversion endpoint.
///
/// The last one is the path the service answered on when deployed as a
/// serverless function; it is kept so existing clients keep working.
pub const CONVERT_PATHS: &[&str] = &[
    "/convert-text",
    "/api/convert-text",
    "/.netlify/functions/api/convert-text",
];

/// Conversion routes.
///
/// # Endpoints
///
/// - `POST /convert-text`
/// - `POST /api/convert-text`
/// - `POST /.netlify/functions/api/convert-text`
pub fn convert_routes() -> Router<AppState> {
    CONVERT_PATHS
        .iter()
        .fold(Router::new(), |router, path| {
            router.route(path, post(convert_text_handler))
        })
}
