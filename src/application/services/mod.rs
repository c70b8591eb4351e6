//! Business logic services for the application layer.

pub mod affiliate_service;
pub mod conversion_service;
pub mod resolver_service;

pub use affiliate_service::AffiliateLinkService;
pub use conversion_service::ConversionService;
pub use resolver_service::UrlResolverService;
