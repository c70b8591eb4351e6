//! Application layer services implementing the conversion pipeline.
//!
//! Services consume the gateway traits from [`crate::domain::gateways`] and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::resolver_service::UrlResolverService`] - Short-link resolution and URL cleanup
//! - [`services::affiliate_service::AffiliateLinkService`] - Affiliate short-link generation
//! - [`services::conversion_service::ConversionService`] - Whole-text conversion

pub mod services;
