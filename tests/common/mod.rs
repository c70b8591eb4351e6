#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shopee_link_converter::application::services::{
    AffiliateLinkService, ConversionService, UrlResolverService,
};
use shopee_link_converter::domain::gateways::{
    AffiliateError, RedirectFollower, ResolutionError, ShortLinkGenerator,
};
use shopee_link_converter::state::AppState;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Redirect follower answering from a fixed table; unknown links fail.
#[derive(Default)]
pub struct StubFollower {
    redirects: HashMap<String, String>,
}

impl StubFollower {
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.redirects.insert(from.to_string(), to.to_string());
        self
    }
}

#[async_trait]
impl RedirectFollower for StubFollower {
    async fn follow(&self, url: &str) -> Result<String, ResolutionError> {
        self.redirects
            .get(url)
            .cloned()
            .ok_or_else(|| ResolutionError::Request(format!("no route to {}", url)))
    }
}

/// Short-link generator answering from a fixed table keyed by canonical URL.
///
/// Unknown URLs fail with a GraphQL error. Every call is recorded.
#[derive(Default)]
pub struct StubGenerator {
    links: HashMap<String, String>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl StubGenerator {
    pub fn with(mut self, origin_url: &str, short_link: &str) -> Self {
        self.links
            .insert(origin_url.to_string(), short_link.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortLinkGenerator for StubGenerator {
    async fn generate(&self, origin_url: &str, sub_ids: &[String]) -> Result<String, AffiliateError> {
        self.calls
            .lock()
            .unwrap()
            .push((origin_url.to_string(), sub_ids.to_vec()));

        self.links
            .get(origin_url)
            .cloned()
            .ok_or_else(|| AffiliateError::GraphQl(vec!["invalid url".to_string()]))
    }
}

pub fn create_test_state(follower: StubFollower, generator: Arc<StubGenerator>) -> AppState {
    let service = ConversionService::new(
        UrlResolverService::new(Arc::new(follower)),
        AffiliateLinkService::new(generator),
    );

    AppState::new(Arc::new(service))
}

/// Serves `router` on an ephemeral local port and returns its address.
pub async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Returns an address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
