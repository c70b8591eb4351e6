//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer,
//! providing concrete HTTP clients for the outbound calls.
//!
//! # Modules
//!
//! - [`affiliate`] - Signed GraphQL client for the Shopee affiliate API
//! - [`http`] - Redirect following for short links

pub mod affiliate;
pub mod http;
