//! Gateway trait for the affiliate short-link API.

use async_trait::async_trait;

/// Errors returned by the affiliate API client.
#[derive(Debug, thiserror::Error)]
pub enum AffiliateError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Affiliate API request failed: {0}")]
    Transport(String),

    #[error("Affiliate API returned HTTP {0}")]
    Status(u16),

    #[error("Affiliate API returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("Malformed affiliate API response: {0}")]
    MalformedResponse(String),
}

/// Generates affiliate short links for canonical marketplace URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::affiliate::ShopeeAffiliateClient`] - signed GraphQL client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkGenerator: Send + Sync {
    /// Requests a short link for `origin_url`, tagged with `sub_ids`.
    ///
    /// `sub_ids` is passed as received; blank entries are the implementation's
    /// concern.
    ///
    /// # Errors
    ///
    /// Returns [`AffiliateError`] for transport failures, non-2xx responses,
    /// GraphQL errors, and responses without a short link.
    async fn generate(&self, origin_url: &str, sub_ids: &[String]) -> Result<String, AffiliateError>;
}
