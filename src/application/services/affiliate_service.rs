//! Affiliate short-link generation service.

use std::sync::Arc;
use tracing::warn;

use crate::domain::gateways::ShortLinkGenerator;

/// Obtains affiliate short links, collapsing every failure to `None`.
///
/// Callers treat `None` as "this link could not be converted"; errors never
/// propagate past this service. An empty short link counts as a failure.
pub struct AffiliateLinkService {
    generator: Arc<dyn ShortLinkGenerator>,
}

impl AffiliateLinkService {
    /// Creates a new affiliate link service.
    pub fn new(generator: Arc<dyn ShortLinkGenerator>) -> Self {
        Self { generator }
    }

    /// Requests a short link for a canonical URL.
    pub async fn short_link(&self, origin_url: &str, sub_ids: &[String]) -> Option<String> {
        match self.generator.generate(origin_url, sub_ids).await {
            Ok(short_link) if short_link.is_empty() => {
                warn!("Empty short link returned for {}", origin_url);
                None
            }
            Ok(short_link) => Some(short_link),
            Err(e) => {
                warn!("Failed to generate short link for {}: {}", origin_url, e);
                None
            }
        }
    }
}
