//! Command-line companion for the link converter.
//!
//! Runs the same pipeline as the HTTP service without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Convert a text (or pipe it through stdin)
//! cargo run --bin linkconv -- convert --sub-id fb "Mua ngay https://s.shopee.vn/AbCdE"
//! echo "https://shopee.vn/shop/1/2" | cargo run --bin linkconv -- convert
//!
//! # Show the canonical URL of a link
//! cargo run --bin linkconv -- resolve https://s.shopee.vn/AbCdE
//!
//! # Compute a request signature
//! cargo run --bin linkconv -- sign --timestamp 1700000000 --body '{"query":"..."}'
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPEE_APP_ID`, `SHOPEE_APP_SECRET`: required by `convert` and `sign`
//! - `SHOPEE_API_URL`: affiliate endpoint override
//! - `REDIRECT_MAX_HOPS`: redirect cap (default: 5)

use shopee_link_converter::application::services::{
    AffiliateLinkService, ConversionService, UrlResolverService,
};
use shopee_link_converter::config::AffiliateCredentials;
use shopee_link_converter::domain::entities::ConversionReport;
use shopee_link_converter::infrastructure::affiliate::signature::{authorization_header, sign};
use shopee_link_converter::infrastructure::affiliate::{DEFAULT_API_URL, ShopeeAffiliateClient};
use shopee_link_converter::infrastructure::http::HttpRedirectFollower;
use shopee_link_converter::logging;
use shopee_link_converter::utils::link_extractor::strip_trailing_punctuation;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::Read;
use std::sync::Arc;

/// CLI tool for converting Shopee links.
#[derive(Parser)]
#[command(name = "linkconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Affiliate application id
    #[arg(long, global = true, env = "SHOPEE_APP_ID")]
    app_id: Option<String>,

    /// Affiliate application secret
    #[arg(long, global = true, env = "SHOPEE_APP_SECRET", hide_env_values = true)]
    app_secret: Option<String>,

    /// Affiliate GraphQL endpoint
    #[arg(long, global = true, env = "SHOPEE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Maximum redirects followed for short links
    #[arg(long, global = true, env = "REDIRECT_MAX_HOPS", default_value_t = 5)]
    max_hops: usize,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every Shopee link in a text
    Convert {
        /// Sub-id attached to every generated link (repeatable)
        #[arg(long = "sub-id")]
        sub_ids: Vec<String>,

        /// Text to convert; read from stdin when omitted
        text: Option<String>,
    },

    /// Resolve a link to its canonical URL
    Resolve {
        url: String,
    },

    /// Print the signature for a request body
    Sign {
        /// Unix timestamp in seconds
        #[arg(long)]
        timestamp: i64,

        /// Exact request body
        #[arg(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        logging::init("shopee_link_converter=debug", "text");
    }

    match &cli.command {
        Commands::Convert { sub_ids, text } => convert(&cli, sub_ids, text.clone()).await?,
        Commands::Resolve { url } => resolve(&cli, url).await?,
        Commands::Sign { timestamp, body } => print_signature(&cli, *timestamp, body)?,
    }

    Ok(())
}

/// Builds credentials from flags or environment.
fn credentials(cli: &Cli) -> Result<AffiliateCredentials> {
    let app_id = cli
        .app_id
        .clone()
        .filter(|v| !v.trim().is_empty())
        .context("SHOPEE_APP_ID (or --app-id) must be set")?;
    let app_secret = cli
        .app_secret
        .clone()
        .filter(|v| !v.is_empty())
        .context("SHOPEE_APP_SECRET (or --app-secret) must be set")?;

    Ok(AffiliateCredentials::new(app_id, app_secret))
}

fn resolver(cli: &Cli) -> Result<UrlResolverService> {
    let follower = HttpRedirectFollower::new(cli.max_hops)?;
    Ok(UrlResolverService::new(Arc::new(follower)))
}

/// Converts a text and prints the result followed by a per-link summary.
async fn convert(cli: &Cli, sub_ids: &[String], text: Option<String>) -> Result<()> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let generator = ShopeeAffiliateClient::new(cli.api_url.clone(), credentials(cli)?)?;
    let service = ConversionService::new(
        resolver(cli)?,
        AffiliateLinkService::new(Arc::new(generator)),
    );

    let report = service.convert_text(&text, sub_ids).await?;

    println!("{}", report.new_text);
    print_summary(&report);

    Ok(())
}

/// Prints the per-link summary to stderr so stdout stays pipeable.
fn print_summary(report: &ConversionReport) {
    eprintln!();

    if report.details.is_empty() {
        eprintln!("{}", "No links found".yellow());
        return;
    }

    eprintln!(
        "{} {}/{} links converted",
        "Summary:".bright_white().bold(),
        report.converted().to_string().green().bold(),
        report.total_links()
    );

    for detail in &report.details {
        match &detail.short {
            Some(short) => eprintln!(
                "  {} {} → {}",
                "✓".green(),
                detail.original.dimmed(),
                short.cyan()
            ),
            None => eprintln!(
                "  {} {} ({})",
                "✗".red(),
                detail.original.dimmed(),
                detail.resolved.yellow()
            ),
        }
    }
}

/// Resolves a single link and prints how it was obtained.
async fn resolve(cli: &Cli, url: &str) -> Result<()> {
    let resolved = resolver(cli)?
        .resolve(strip_trailing_punctuation(url))
        .await;

    let via = if resolved.is_fallback() {
        resolved.via.as_str().red()
    } else {
        resolved.via.as_str().green()
    };

    println!("{}", resolved.url);
    eprintln!("{} {}", "Resolved via:".bright_white(), via);

    Ok(())
}

/// Prints the signature and `Authorization` header for a body.
fn print_signature(cli: &Cli, timestamp: i64, body: &str) -> Result<()> {
    let credentials = credentials(cli)?;
    let signature = sign(&credentials, timestamp, body);

    println!("{}", signature);
    eprintln!(
        "  {}: {}",
        "Authorization".bright_cyan(),
        authorization_header(&credentials.app_id, timestamp, &signature)
    );

    Ok(())
}
