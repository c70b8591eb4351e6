//! Canonicalization of Shopee URLs.
//!
//! Turns a fully resolved marketplace URL into its canonical form by
//! classifying the path and dropping tracking parameters. All functions here
//! are pure; redirect following lives in [`crate::application::services`].

use regex::Regex;
use std::sync::LazyLock;
use url::{Url, form_urlencoded};

/// Hosts that only redirect to the marketplace and must be followed first.
const SHORT_LINK_HOSTS: &[&str] = &["s.shopee.vn", "shp.ee", "vn.shp.ee"];

/// Query parameters kept on search pages, in output order.
const SEARCH_PARAM_ALLOW_LIST: &[&str] = &[
    "keyword",
    "shop",
    "evcode",
    "signature",
    "promotionId",
    "mmp_pid",
];

/// `shopee.vn/<shop name>/<shop id>/<item id>`
static SHOP_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)shopee\.vn/[^/]+/([0-9]+)/([0-9]+)").unwrap());

const TRAILING_SEPARATORS: &[char] = &['?', '&'];

/// Returns true when `url` points at one of the short-link hosts.
///
/// The host is compared case-insensitively and a leading `www.` is ignored.
/// Unparsable input is never a short link.
pub fn is_short_link(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let Some(host) = parsed.host_str() else {
        return false;
    };

    let host = host.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);

    SHORT_LINK_HOSTS.contains(&host)
}

/// Canonicalizes an already resolved URL.
///
/// # Rules
///
/// Applied to the URL without its query string (the *base*), first match wins:
///
/// 1. **Search page** (`/search` in the base): only allow-listed parameters
///    survive, in the fixed allow-list order
/// 2. **Shop item** (`shopee.vn/<shop>/<shop id>/<item id>`): rewritten to
///    `https://shopee.vn/product/<shop id>/<item id>`
/// 3. **Canonical** (`/m/`, `/product/`, or four `/`-separated segments):
///    the base is returned as-is
/// 4. **Anything else**: tracking parameters are cut off the full URL, see
///    [`strip_tracking_params`]
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     canonicalize("https://shopee.vn/search?keyword=shoe&foo=bar&evcode=X"),
///     "https://shopee.vn/search?keyword=shoe&evcode=X"
/// );
/// assert_eq!(
///     canonicalize("https://shopee.vn/some-shop/111/222?sp_atk=abc"),
///     "https://shopee.vn/product/111/222"
/// );
/// ```
pub fn canonicalize(url: &str) -> String {
    let base = url.split('?').next().unwrap_or(url);

    if base.contains("/search") {
        return clean_search_url(url, base);
    }

    if let Some(caps) = SHOP_ITEM_REGEX.captures(base) {
        return format!("https://shopee.vn/product/{}/{}", &caps[1], &caps[2]);
    }

    if base.contains("/m/") || base.contains("/product/") || base.split('/').count() == 4 {
        return base.to_string();
    }

    strip_tracking_params(url)
}

/// Rebuilds a search URL keeping only allow-listed parameters.
///
/// Falls back to the bare base URL when nothing is kept or the URL does not
/// parse.
fn clean_search_url(url: &str, base: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return base.to_string();
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut kept = 0;

    for key in SEARCH_PARAM_ALLOW_LIST {
        if let Some((_, value)) = parsed.query_pairs().find(|(k, _)| k == key) {
            query.append_pair(key, &value);
            kept += 1;
        }
    }

    if kept == 0 {
        return base.to_string();
    }

    format!("{}?{}", base, query.finish())
}

/// Cuts known tracking markers off a URL.
///
/// Each marker truncates everything from its first occurrence onward, in this
/// order: `uls_trackid=`, `utm_source=`, then `mmp_pid=` unless the URL is a
/// search URL. A single trailing `?` or `&` is trimmed afterwards.
pub fn strip_tracking_params(url: &str) -> String {
    let mut cleaned = url;

    for marker in ["uls_trackid=", "utm_source="] {
        if let Some(pos) = cleaned.find(marker) {
            cleaned = &cleaned[..pos];
        }
    }

    if !cleaned.contains("/search")
        && let Some(pos) = cleaned.find("mmp_pid=")
    {
        cleaned = &cleaned[..pos];
    }

    cleaned
        .strip_suffix(TRAILING_SEPARATORS)
        .unwrap_or(cleaned)
        .to_string()
}
