//! Signed GraphQL client for `generateShortLink`.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use super::graphql::{GraphQlResponse, build_mutation, request_body};
use super::signature::{authorization_header, sign};
use crate::config::AffiliateCredentials;
use crate::domain::gateways::{AffiliateError, ShortLinkGenerator};

/// Production endpoint of the Shopee Vietnam affiliate open API.
pub const DEFAULT_API_URL: &str = "https://open-api.affiliate.shopee.vn/graphql";

/// A request body together with the `Authorization` header that signs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub body: String,
    pub authorization: String,
    pub timestamp: i64,
}

/// Client for the affiliate GraphQL API.
///
/// Credentials are fixed at construction. Every call is signed with the
/// current Unix time in seconds.
pub struct ShopeeAffiliateClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: AffiliateCredentials,
}

impl ShopeeAffiliateClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, credentials: AffiliateCredentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        })
    }

    /// Builds and signs the request for `origin_url` at `timestamp`.
    ///
    /// The returned body is the exact byte sequence covered by the signature.
    ///
    /// # Errors
    ///
    /// Returns [`AffiliateError::Request`] if the body cannot be serialized.
    pub fn prepare(
        &self,
        origin_url: &str,
        sub_ids: &[String],
        timestamp: i64,
    ) -> Result<SignedRequest, AffiliateError> {
        let query = build_mutation(origin_url, sub_ids);
        let body = request_body(&query)?;
        let signature = sign(&self.credentials, timestamp, &body);
        let authorization = authorization_header(&self.credentials.app_id, timestamp, &signature);

        Ok(SignedRequest {
            body,
            authorization,
            timestamp,
        })
    }
}

#[async_trait]
impl ShortLinkGenerator for ShopeeAffiliateClient {
    async fn generate(&self, origin_url: &str, sub_ids: &[String]) -> Result<String, AffiliateError> {
        let request = self.prepare(origin_url, sub_ids, Utc::now().timestamp())?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &request.authorization)
            .body(request.body)
            .send()
            .await
            .map_err(|e| AffiliateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AffiliateError::Status(status.as_u16()));
        }

        let payload: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| AffiliateError::MalformedResponse(e.to_string()))?;

        payload.into_short_link()
    }
}
