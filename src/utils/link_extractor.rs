//! Extraction of Shopee links from free-form text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches a Shopee link: scheme, optional `www.`, one of the marketplace or
/// short-link hosts, then the rest of the non-whitespace run.
static SHOPEE_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://(?:www\.)?(?:shopee\.vn|vn\.shp\.ee|shp\.ee|s\.shopee\.vn)\S*")
        .expect("link pattern is valid")
});

/// Characters stripped from the end of a matched link before resolution.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', '!', '?', ')'];

/// Returns every distinct Shopee link in `text`, in first-seen order.
///
/// Links are compared by exact string equality, so `https://shopee.vn/a` and
/// `https://shopee.vn/a.` are two different links.
///
/// # Examples
///
/// ```ignore
/// let links = extract_unique_links("see https://shopee.vn/a and https://shopee.vn/a");
/// assert_eq!(links, vec!["https://shopee.vn/a"]);
/// ```
pub fn extract_unique_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    SHOPEE_LINK_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|link| seen.insert(*link))
        .map(str::to_string)
        .collect()
}

/// Strips any run of trailing `.` `,` `;` `!` `?` `)` from a matched link.
pub fn strip_trailing_punctuation(link: &str) -> &str {
    link.trim_end_matches(TRAILING_PUNCTUATION)
}
