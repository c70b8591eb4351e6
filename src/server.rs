//! HTTP server initialization and runtime setup.
//!
//! Wires the outbound clients into the conversion service and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::{AffiliateLinkService, ConversionService, UrlResolverService};
use crate::config::Config;
use crate::infrastructure::affiliate::ShopeeAffiliateClient;
use crate::infrastructure::http::HttpRedirectFollower;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the conversion service from configuration.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be created.
pub fn build_conversion_service(config: &Config) -> Result<ConversionService> {
    let follower = Arc::new(HttpRedirectFollower::new(config.redirect_max_hops)?);
    let generator = Arc::new(ShopeeAffiliateClient::new(
        config.affiliate_api_url.clone(),
        config.credentials.clone(),
    )?);

    Ok(ConversionService::new(
        UrlResolverService::new(follower),
        AffiliateLinkService::new(generator),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - An HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let conversion_service = build_conversion_service(&config)?;
    tracing::info!("Affiliate client ready ({})", config.affiliate_api_url);

    let state = AppState::new(Arc::new(conversion_service));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
