//! Handler for the text conversion endpoint.

use axum::{Json, body::Bytes, extract::State};
use serde_json::json;
use tracing::warn;

use crate::api::dto::convert::{ConvertRequest, ConvertResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Rewrites every Shopee link in the submitted text into an affiliate short link.
///
/// # Endpoint
///
/// `POST /convert-text` (also `/api/convert-text` and
/// `/.netlify/functions/api/convert-text`)
///
/// The body is read as raw bytes and parsed as JSON whatever the
/// `Content-Type`, so clients posting `text/plain` are accepted.
///
/// # Request Body
///
/// ```json
/// {
///   "text": "Xem ngay https://s.shopee.vn/AbCdE nhé!",
///   "subIds": ["facebook", "summer"]   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "newText": "Xem ngay https://s.shopee.vn/XyZ12 nhé!",
///   "totalLinks": 1,
///   "converted": 1,
///   "details": [
///     {
///       "original": "https://s.shopee.vn/AbCdE",
///       "resolved": "https://shopee.vn/product/111/222",
///       "short": "https://s.shopee.vn/XyZ12"
///     }
///   ]
/// }
/// ```
///
/// Text without links yields `{"success": true, "newText": ..., "message": "No links found", "converted": 0}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `text` is missing
/// or empty. Failures of individual links are reported in `details` with
/// `short: null` and never fail the request.
pub async fn convert_text_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConvertResponse>, AppError> {
    let request: ConvertRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to parse request body: {}", e);
        AppError::bad_request(
            "Failed to parse request body as JSON",
            json!({ "details": e.to_string() }),
        )
    })?;

    let text = request.text.unwrap_or_default();
    let sub_ids = request.sub_ids.unwrap_or_default();

    let report = state
        .conversion_service
        .convert_text(&text, &sub_ids)
        .await?;

    Ok(Json(report.into()))
}
