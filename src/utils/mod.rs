//! Utility functions for link extraction and URL processing.
//!
//! - [`link_extractor`] - Finding Shopee links in free-form text
//! - [`url_cleaner`] - Canonicalization and tracking-parameter removal

pub mod link_extractor;
pub mod url_cleaner;
