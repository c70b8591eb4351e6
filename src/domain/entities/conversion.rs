//! Per-link conversion results and the rewritten text they produce.

/// Result of converting one distinct link found in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Exact matched substring, trailing punctuation included.
    pub original: String,
    /// Canonical URL the short link was requested for.
    pub resolved: String,
    /// Affiliate short link, or `None` if the affiliate API call failed.
    pub short: Option<String>,
}

impl Conversion {
    pub fn new(original: String, resolved: String, short: Option<String>) -> Self {
        Self {
            original,
            resolved,
            short,
        }
    }

    pub fn is_converted(&self) -> bool {
        self.short.is_some()
    }
}

/// Outcome of converting a whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub new_text: String,
    /// One entry per distinct link, in first-seen order.
    pub details: Vec<Conversion>,
}

impl ConversionReport {
    /// Applies successful conversions to `text`.
    ///
    /// Every literal occurrence of each converted link is replaced; links whose
    /// short link is missing are left untouched.
    pub fn build(text: &str, details: Vec<Conversion>) -> Self {
        let new_text = details
            .iter()
            .filter_map(|c| c.short.as_deref().map(|short| (c.original.as_str(), short)))
            .fold(text.to_string(), |acc, (original, short)| {
                acc.replace(original, short)
            });

        Self { new_text, details }
    }

    /// Number of distinct links found.
    pub fn total_links(&self) -> usize {
        self.details.len()
    }

    /// Number of distinct links that received a short link.
    pub fn converted(&self) -> usize {
        self.details.iter().filter(|c| c.is_converted()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversion(original: &str, short: Option<&str>) -> Conversion {
        Conversion::new(
            original.to_string(),
            original.to_string(),
            short.map(str::to_string),
        )
    }

    #[test]
    fn test_build_replaces_every_occurrence() {
        let report = ConversionReport::build(
            "a https://shopee.vn/x b https://shopee.vn/x",
            vec![conversion("https://shopee.vn/x", Some("https://s.shopee.vn/AF1"))],
        );

        assert_eq!(
            report.new_text,
            "a https://s.shopee.vn/AF1 b https://s.shopee.vn/AF1"
        );
        assert_eq!(report.total_links(), 1);
        assert_eq!(report.converted(), 1);
    }

    #[test]
    fn test_build_leaves_failed_links_untouched() {
        let report = ConversionReport::build(
            "https://shopee.vn/ok https://shp.ee/bad",
            vec![
                conversion("https://shopee.vn/ok", Some("https://s.shopee.vn/OK")),
                conversion("https://shp.ee/bad", None),
            ],
        );

        assert_eq!(report.new_text, "https://s.shopee.vn/OK https://shp.ee/bad");
        assert_eq!(report.total_links(), 2);
        assert_eq!(report.converted(), 1);
    }

    #[test]
    fn test_build_replacement_is_case_sensitive() {
        let report = ConversionReport::build(
            "https://shopee.vn/X HTTPS://SHOPEE.VN/X",
            vec![conversion("https://shopee.vn/X", Some("S"))],
        );

        assert_eq!(report.new_text, "S HTTPS://SHOPEE.VN/X");
    }

    #[test]
    fn test_build_without_details() {
        let report = ConversionReport::build("plain text", vec![]);

        assert_eq!(report.new_text, "plain text");
        assert_eq!(report.total_links(), 0);
        assert_eq!(report.converted(), 0);
    }
}
