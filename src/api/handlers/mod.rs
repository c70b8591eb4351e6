//! HTTP request handlers for API endpoints.

pub mod convert;
pub mod health;
pub mod not_found;

pub use convert::convert_text_handler;
pub use health::health_handler;
pub use not_found::not_found_handler;
