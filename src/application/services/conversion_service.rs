//! Whole-text link conversion service.

use futures::future::join_all;
use serde_json::json;
use tracing::{debug, info};

use super::{AffiliateLinkService, UrlResolverService};
use crate::domain::entities::{Conversion, ConversionReport};
use crate::error::AppError;
use crate::utils::link_extractor::{extract_unique_links, strip_trailing_punctuation};

/// Rewrites every Shopee link in a text into an affiliate short link.
///
/// # Pipeline
///
/// 1. Extract distinct links in first-seen order
/// 2. For each link, concurrently: strip trailing punctuation, resolve, then
///    request a short link
/// 3. Replace every occurrence of each converted link in the text
///
/// Individual link failures never fail the request; unconverted links are
/// left as they were.
pub struct ConversionService {
    resolver: UrlResolverService,
    affiliate: AffiliateLinkService,
}

impl ConversionService {
    /// Creates a new conversion service.
    pub fn new(resolver: UrlResolverService, affiliate: AffiliateLinkService) -> Self {
        Self {
            resolver,
            affiliate,
        }
    }

    /// Converts a single matched link.
    ///
    /// `raw` is recorded verbatim as the conversion's `original`, trailing
    /// punctuation included.
    pub async fn convert_link(&self, raw: &str, sub_ids: &[String]) -> Conversion {
        let clean_input = strip_trailing_punctuation(raw);
        let resolved = self.resolver.resolve(clean_input).await;
        let short = self.affiliate.short_link(&resolved.url, sub_ids).await;

        debug!(
            via = resolved.via.as_str(),
            converted = short.is_some(),
            "Processed link {}",
            raw
        );

        Conversion::new(raw.to_string(), resolved.url, short)
    }

    /// Converts every link in `text`.
    ///
    /// All links are processed concurrently on the calling task; the report
    /// lists them in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `text` is empty.
    pub async fn convert_text(
        &self,
        text: &str,
        sub_ids: &[String],
    ) -> Result<ConversionReport, AppError> {
        if text.is_empty() {
            return Err(AppError::bad_request(
                "Missing content: text is empty",
                json!({}),
            ));
        }

        let links = extract_unique_links(text);
        if links.is_empty() {
            debug!("No links found in {} bytes of text", text.len());
            return Ok(ConversionReport::build(text, Vec::new()));
        }

        let details = join_all(links.iter().map(|link| self.convert_link(link, sub_ids))).await;
        let report = ConversionReport::build(text, details);

        info!(
            total = report.total_links(),
            converted = report.converted(),
            "Converted text"
        );

        Ok(report)
    }
}
