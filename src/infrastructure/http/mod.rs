//! Plain HTTP integrations.
//!
//! - [`HttpRedirectFollower`] - Resolves short links via reqwest's redirect policy

mod redirect_follower;

pub use redirect_follower::HttpRedirectFollower;
