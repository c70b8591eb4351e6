//! HTTP-facing error type.
//!
//! Only structurally invalid requests surface as errors. Per-link failures
//! (redirects, affiliate API) are absorbed by the conversion pipeline and never
//! reach this type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

/// Error returned by request handlers.
///
/// Rendered as a flat JSON object: `{"error": <message>, ...details}`. When
/// `details` is a JSON object its fields are merged into the body; any other
/// non-null value is placed under a `details` key.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Builds the JSON body sent to the client.
    pub fn to_body(&self) -> Value {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details } => (message, details),
        };

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message.clone()));

        match details {
            Value::Object(fields) => {
                for (key, value) in fields {
                    if key != "error" {
                        body.insert(key.clone(), value.clone());
                    }
                }
            }
            Value::Null => {}
            other => {
                body.insert("details".to_string(), other.clone());
            }
        }

        Value::Object(body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}
