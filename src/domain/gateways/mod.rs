//! Outbound gateway trait definitions for the domain layer.
//!
//! The conversion pipeline talks to the outside world through two traits,
//! implemented in `crate::infrastructure`. Mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Gateways
//!
//! - [`RedirectFollower`] - Resolves short links by following redirects
//! - [`ShortLinkGenerator`] - Obtains affiliate short links

pub mod redirect_follower;
pub mod short_link_generator;

pub use redirect_follower::{RedirectFollower, ResolutionError};
pub use short_link_generator::{AffiliateError, ShortLinkGenerator};

#[cfg(test)]
pub use redirect_follower::MockRedirectFollower;
#[cfg(test)]
pub use short_link_generator::MockShortLinkGenerator;
