//! GraphQL document and response types for `generateShortLink`.

use serde::{Deserialize, Serialize};

use crate::domain::gateways::AffiliateError;

/// Request envelope. Serialized exactly once; the resulting string is both
/// signed and sent.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// Builds the `generateShortLink` mutation for `origin_url`.
///
/// Sub-ids are trimmed and blank ones dropped; the `subIds` argument is only
/// emitted when at least one remains. Order and duplicates are preserved.
///
/// ```text
/// mutation { generateShortLink(input: { originUrl: "https://shopee.vn/product/1/2", subIds: ["a","b"] }) { shortLink } }
/// ```
pub fn build_mutation(origin_url: &str, sub_ids: &[String]) -> String {
    let ids: Vec<String> = sub_ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .map(quote)
        .collect();

    let sub_ids_arg = if ids.is_empty() {
        String::new()
    } else {
        format!(", subIds: [{}]", ids.join(","))
    };

    format!(
        "mutation {{ generateShortLink(input: {{ originUrl: {}{} }}) {{ shortLink }} }}",
        quote(origin_url),
        sub_ids_arg
    )
}

/// Serializes the request body for a mutation document.
///
/// # Errors
///
/// Returns [`AffiliateError::Request`] if serialization fails.
pub fn request_body(query: &str) -> Result<String, AffiliateError> {
    serde_json::to_string(&GraphQlRequest { query })
        .map_err(|e| AffiliateError::Request(e.to_string()))
}

/// Renders a GraphQL string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ShortLinkData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct ShortLinkData {
    #[serde(rename = "generateShortLink")]
    pub generate_short_link: Option<ShortLinkPayload>,
}

#[derive(Debug, Deserialize)]
pub struct ShortLinkPayload {
    #[serde(rename = "shortLink")]
    pub short_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

impl GraphQlResponse {
    /// Extracts `data.generateShortLink.shortLink`.
    ///
    /// Any `errors` entry fails the call, even when `data` is also present.
    ///
    /// # Errors
    ///
    /// Returns [`AffiliateError::GraphQl`] when errors are reported and
    /// [`AffiliateError::MalformedResponse`] when the short link is missing or
    /// empty.
    pub fn into_short_link(self) -> Result<String, AffiliateError> {
        if let Some(errors) = self.errors {
            return Err(AffiliateError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        self.data
            .and_then(|d| d.generate_short_link)
            .and_then(|p| p.short_link)
            .filter(|link| !link.is_empty())
            .ok_or_else(|| {
                AffiliateError::MalformedResponse("missing data.generateShortLink.shortLink".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_mutation_without_sub_ids() {
        assert_eq!(
            build_mutation("https://shopee.vn/product/1/2", &[]),
            r#"mutation { generateShortLink(input: { originUrl: "https://shopee.vn/product/1/2" }) { shortLink } }"#
        );
    }

    #[test]
    fn test_mutation_with_sub_ids() {
        assert_eq!(
            build_mutation("https://shopee.vn/product/1/2", &ids(&["fb", "post1"])),
            r#"mutation { generateShortLink(input: { originUrl: "https://shopee.vn/product/1/2", subIds: ["fb","post1"] }) { shortLink } }"#
        );
    }

    #[test]
    fn test_mutation_trims_and_drops_blank_sub_ids() {
        let mutation = build_mutation("u", &ids(&["  a ", "", "   ", "b", "a"]));
        assert!(mutation.contains(r#"subIds: ["a","b","a"]"#));
    }

    #[test]
    fn test_mutation_all_blank_sub_ids_omits_argument() {
        let mutation = build_mutation("u", &ids(&["", "  "]));
        assert!(!mutation.contains("subIds"));
    }

    #[test]
    fn test_mutation_escapes_quotes() {
        let mutation = build_mutation(r#"https://shopee.vn/a"b"#, &ids(&[r#"x"y"#]));
        assert!(mutation.contains(r#"originUrl: "https://shopee.vn/a\"b""#));
        assert!(mutation.contains(r#"subIds: ["x\"y"]"#));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body(r#"mutation { x(a: "b") }"#).unwrap();
        assert_eq!(body, r#"{"query":"mutation { x(a: \"b\") }"}"#);
    }

    #[test]
    fn test_response_success() {
        let response: GraphQlResponse = serde_json::from_str(
            r#"{"data":{"generateShortLink":{"shortLink":"https://s.shopee.vn/AbC"}}}"#,
        )
        .unwrap();

        assert_eq!(response.into_short_link().unwrap(), "https://s.shopee.vn/AbC");
    }

    #[test]
    fn test_response_errors_fail() {
        let response: GraphQlResponse = serde_json::from_str(
            r#"{"errors":[{"message":"invalid signature","extensions":{"code":10020}}],"data":null}"#,
        )
        .unwrap();

        match response.into_short_link() {
            Err(AffiliateError::GraphQl(messages)) => {
                assert_eq!(messages, vec!["invalid signature".to_string()])
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_response_empty_errors_array_still_fails() {
        let response: GraphQlResponse = serde_json::from_str(
            r#"{"errors":[],"data":{"generateShortLink":{"shortLink":"x"}}}"#,
        )
        .unwrap();

        assert!(matches!(
            response.into_short_link(),
            Err(AffiliateError::GraphQl(_))
        ));
    }

    #[test]
    fn test_response_missing_short_link() {
        let response: GraphQlResponse =
            serde_json::from_str(r#"{"data":{"generateShortLink":null}}"#).unwrap();

        assert!(matches!(
            response.into_short_link(),
            Err(AffiliateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_response_empty_short_link_fails() {
        let response: GraphQlResponse =
            serde_json::from_str(r#"{"data":{"generateShortLink":{"shortLink":""}}}"#).unwrap();

        assert!(matches!(
            response.into_short_link(),
            Err(AffiliateError::MalformedResponse(_))
        ));
    }
}
