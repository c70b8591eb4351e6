//! reqwest-backed redirect follower.

use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use crate::domain::gateways::{RedirectFollower, ResolutionError};

/// Browser-like User-Agent; the short-link hosts answer bots differently.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Follows redirects with a bounded number of hops.
///
/// The final URL is taken from the last response regardless of its status
/// code. No timeout is configured beyond the client defaults.
pub struct HttpRedirectFollower {
    client: reqwest::Client,
    max_hops: usize,
}

impl HttpRedirectFollower {
    /// Creates a follower that gives up after `max_hops` redirects.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(max_hops: usize) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(max_hops))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, max_hops })
    }
}

#[async_trait]
impl RedirectFollower for HttpRedirectFollower {
    async fn follow(&self, url: &str) -> Result<String, ResolutionError> {
        let parsed = Url::parse(url).map_err(|e| ResolutionError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_redirect() {
                ResolutionError::TooManyRedirects(self.max_hops)
            } else {
                ResolutionError::Request(e.to_string())
            }
        })?;

        tracing::debug!(
            status = response.status().as_u16(),
            "Followed {} to {}",
            url,
            response.url()
        );

        Ok(response.url().to_string())
    }
}
