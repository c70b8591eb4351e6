//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field names
//! follow the camelCase wire format of the public API.

pub mod convert;
pub mod health;
