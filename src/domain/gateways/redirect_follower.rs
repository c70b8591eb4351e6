//! Gateway trait for following short-link redirects.

use async_trait::async_trait;

/// Errors that can occur while following redirects.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Too many redirects (limit: {0})")]
    TooManyRedirects(usize),

    #[error("Redirect request failed: {0}")]
    Request(String),
}

/// Follows HTTP redirects for a short link.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpRedirectFollower`] - reqwest-backed follower
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectFollower: Send + Sync {
    /// Issues a GET for `url` and returns the effective URL of the last response.
    ///
    /// Any response status is accepted; only transport failures and exceeding
    /// the redirect limit are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError`] when the final URL could not be determined.
    async fn follow(&self, url: &str) -> Result<String, ResolutionError>;
}
