//! Fallback handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers every unmatched route, and known routes hit with the wrong method,
/// with 404 `{"error": "Route not found", "path": ...}`.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
