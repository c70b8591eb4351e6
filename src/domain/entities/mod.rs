//! Core domain entities of the link conversion pipeline.
//!
//! Entities are plain data structures; the pipeline that produces them lives in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`ResolvedUrl`] - A canonical URL and how it was obtained
//! - [`Conversion`] - The outcome for one distinct link
//! - [`ConversionReport`] - The rewritten text and all per-link outcomes

pub mod conversion;
pub mod resolved_url;

pub use conversion::{Conversion, ConversionReport};
pub use resolved_url::{ResolvedUrl, ResolvedVia};
