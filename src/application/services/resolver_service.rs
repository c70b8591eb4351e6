//! Short-link resolution and URL cleanup service.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{ResolvedUrl, ResolvedVia};
use crate::domain::gateways::RedirectFollower;
use crate::utils::url_cleaner::{canonicalize, is_short_link};

/// Resolves a matched link to its canonical marketplace URL.
///
/// Short links are followed through a [`RedirectFollower`]; the resulting URL
/// is then canonicalized (see [`canonicalize`]). Resolution never fails: if a
/// redirect cannot be followed the input URL is used and the outcome is marked
/// [`ResolvedVia::Fallback`].
pub struct UrlResolverService {
    follower: Arc<dyn RedirectFollower>,
}

impl UrlResolverService {
    /// Creates a new resolver service.
    pub fn new(follower: Arc<dyn RedirectFollower>) -> Self {
        Self { follower }
    }

    /// Resolves and cleans `input`.
    ///
    /// `input` is expected to be already stripped of trailing punctuation.
    pub async fn resolve(&self, input: &str) -> ResolvedUrl {
        let (final_url, via) = if is_short_link(input) {
            match self.follower.follow(input).await {
                Ok(url) => {
                    debug!("Resolved short link {} to {}", input, url);
                    (url, ResolvedVia::Redirect)
                }
                Err(e) => {
                    warn!("Failed to resolve short link {}: {}. Using it as-is.", input, e);
                    (input.to_string(), ResolvedVia::Fallback)
                }
            }
        } else {
            (input.to_string(), ResolvedVia::Direct)
        };

        ResolvedUrl::new(canonicalize(&final_url), via)
    }
}
