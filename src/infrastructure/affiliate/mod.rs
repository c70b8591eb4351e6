//! Shopee affiliate open API integration.
//!
//! - [`graphql`] - Mutation document and response shapes
//! - [`signature`] - `SHA256 Credential=..., Timestamp=..., Signature=...` signing
//! - [`ShopeeAffiliateClient`] - [`crate::domain::gateways::ShortLinkGenerator`] implementation

pub mod graphql;
pub mod signature;
mod shopee_client;

pub use shopee_client::{DEFAULT_API_URL, ShopeeAffiliateClient, SignedRequest};
