//! Request signing for the affiliate open API.
//!
//! The signature is the lowercase hex SHA-256 of
//! `app_id ‖ timestamp ‖ payload ‖ app_secret`, where `payload` is the exact
//! request body sent over the wire.

use sha2::{Digest, Sha256};

use crate::config::AffiliateCredentials;

/// Computes the request signature.
///
/// Pure function: identical inputs always produce the same signature.
pub fn sign(credentials: &AffiliateCredentials, timestamp: i64, payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credentials.app_id.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(payload.as_bytes());
    hasher.update(credentials.app_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Formats the `Authorization` header value.
pub fn authorization_header(app_id: &str, timestamp: i64, signature: &str) -> String {
    format!("SHA256 Credential={app_id}, Timestamp={timestamp}, Signature={signature}")
}
