//! # Shopee Link Converter
//!
//! Rewrites Shopee marketplace links found in free-form text into affiliate
//! short links. Short links are resolved to their product pages, tracking
//! parameters are stripped, and each canonical URL is exchanged for a short
//! link through the signed Shopee affiliate GraphQL API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Conversion entities and gateway traits
//! - **Application Layer** ([`application`]) - Resolution, generation and text conversion
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients for redirects and the affiliate API
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SHOPEE_APP_ID="..."
//! export SHOPEE_APP_SECRET="..."
//!
//! cargo run
//!
//! curl -X POST localhost:3000/convert-text \
//!   -d '{"text":"Mua ngay https://s.shopee.vn/AbCdE","subIds":["fb"]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
