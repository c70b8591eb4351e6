//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export SHOPEE_APP_ID="17301234567"
//! export SHOPEE_APP_SECRET="..."
//! ```
//!
//! ## Required Variables
//!
//! - `SHOPEE_APP_ID` - Affiliate application id
//! - `SHOPEE_APP_SECRET` - Affiliate application secret
//!
//! ## Optional Variables
//!
//! - `SHOPEE_API_URL` - Affiliate GraphQL endpoint (default: `https://open-api.affiliate.shopee.vn/graphql`)
//! - `REDIRECT_MAX_HOPS` - Redirects followed for short links (default: 5, range: 1-20)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::fmt;

use crate::infrastructure::affiliate::DEFAULT_API_URL;

/// Credentials used to sign affiliate API requests.
///
/// `Debug` output never contains the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AffiliateCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl AffiliateCredentials {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Loads credentials from `SHOPEE_APP_ID` and `SHOPEE_APP_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is unset.
    pub fn from_env() -> Result<Self> {
        let app_id = env::var("SHOPEE_APP_ID").context("SHOPEE_APP_ID must be set")?;
        let app_secret = env::var("SHOPEE_APP_SECRET").context("SHOPEE_APP_SECRET must be set")?;

        Ok(Self { app_id, app_secret })
    }
}

impl fmt::Debug for AffiliateCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffiliateCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: AffiliateCredentials,
    pub affiliate_api_url: String,
    /// Maximum number of redirects followed when resolving a short link.
    pub redirect_max_hops: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the affiliate credentials are missing.
    pub fn from_env() -> Result<Self> {
        let credentials =
            AffiliateCredentials::from_env().context("Failed to load affiliate credentials")?;

        let affiliate_api_url =
            env::var("SHOPEE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let redirect_max_hops = env::var("REDIRECT_MAX_HOPS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            credentials,
            affiliate_api_url,
            redirect_max_hops,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the app id or secret is empty
    /// - `affiliate_api_url` is not an HTTP(S) URL
    /// - `redirect_max_hops` is outside 1-20
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.credentials.app_id.trim().is_empty() {
            anyhow::bail!("SHOPEE_APP_ID must not be empty");
        }

        if self.credentials.app_secret.is_empty() {
            anyhow::bail!("SHOPEE_APP_SECRET must not be empty");
        }

        if !self.affiliate_api_url.starts_with("https://")
            && !self.affiliate_api_url.starts_with("http://")
        {
            anyhow::bail!(
                "SHOPEE_API_URL must start with 'http://' or 'https://', got '{}'",
                self.affiliate_api_url
            );
        }

        if self.redirect_max_hops == 0 || self.redirect_max_hops > 20 {
            anyhow::bail!(
                "REDIRECT_MAX_HOPS must be between 1 and 20, got {}",
                self.redirect_max_hops
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Affiliate API: {}", self.affiliate_api_url);
        tracing::info!("  App id: {}", self.credentials.app_id);
        tracing::info!("  App secret: {}", mask_secret(&self.credentials.app_secret));
        tracing::info!("  Redirect hops: {}", self.redirect_max_hops);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping only its length visible.
///
/// - `""` → `<empty>`
/// - `abcdef` → `****** (6 chars)`
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }

    let len = secret.chars().count();
    format!("{} ({} chars)", "*".repeat(len.min(8)), len)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config() -> Config {
        Config {
            credentials: AffiliateCredentials::new("17301234567", "s3cr3t"),
            affiliate_api_url: DEFAULT_API_URL.to_string(),
            redirect_max_hops: 5,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "<empty>");
        assert_eq!(mask_secret("abc"), "*** (3 chars)");
        assert_eq!(mask_secret("a-very-long-secret"), "******** (18 chars)");
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = AffiliateCredentials::new("id-1", "top-secret");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("id-1"));
        assert!(!debug.contains("top-secret"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.redirect_max_hops = 0;
        assert!(config.validate().is_err());
        config.redirect_max_hops = 21;
        assert!(config.validate().is_err());
        config.redirect_max_hops = 5;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.affiliate_api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.affiliate_api_url = DEFAULT_API_URL.to_string();

        config.credentials.app_secret = String::new();
        assert!(config.validate().is_err());
        config.credentials.app_secret = "s3cr3t".to_string();

        config.credentials.app_id = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_credentials() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SHOPEE_APP_ID");
            env::remove_var("SHOPEE_APP_SECRET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SHOPEE_APP_ID", "app");
            env::set_var("SHOPEE_APP_SECRET", "secret");
            env::remove_var("SHOPEE_API_URL");
            env::remove_var("REDIRECT_MAX_HOPS");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.credentials, AffiliateCredentials::new("app", "secret"));
        assert_eq!(config.affiliate_api_url, DEFAULT_API_URL);
        assert_eq!(config.redirect_max_hops, 5);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");

        // Cleanup
        unsafe {
            env::remove_var("SHOPEE_APP_ID");
            env::remove_var("SHOPEE_APP_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("SHOPEE_APP_ID", "app");
            env::set_var("SHOPEE_APP_SECRET", "secret");
            env::set_var("SHOPEE_API_URL", "http://127.0.0.1:9000/graphql");
            env::set_var("REDIRECT_MAX_HOPS", "3");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.affiliate_api_url, "http://127.0.0.1:9000/graphql");
        assert_eq!(config.redirect_max_hops, 3);

        // Cleanup
        unsafe {
            env::remove_var("SHOPEE_APP_ID");
            env::remove_var("SHOPEE_APP_SECRET");
            env::remove_var("SHOPEE_API_URL");
            env::remove_var("REDIRECT_MAX_HOPS");
        }
    }
}
