//! Domain layer containing the conversion entities and outbound contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures produced by the pipeline
//! - [`gateways`] - Traits for redirect following and affiliate link generation
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
