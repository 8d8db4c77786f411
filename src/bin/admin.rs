//! CLI administration tool for shorturl-service.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Number of stored URLs
//! cargo run --bin admin -- stats
//!
//! # Shorten a URL (same validation as the API, including DNS)
//! cargo run --bin admin -- url add https://www.freecodecamp.org
//!
//! # Look up a short code
//! cargo run --bin admin -- url get 67e55044-10b1-426f-9247-bb680e5fe0c8
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shorturl_service::config`]. `STORAGE_BACKEND`
//! must be `postgres`.

use shorturl_service::AppError;
use shorturl_service::application::services::UrlService;
use shorturl_service::config::{self, Config, StorageBackend};
use shorturl_service::infrastructure::persistence::PgUrlRepository;
use shorturl_service::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Validate and shorten a URL
    Add {
        /// Absolute http(s) URL
        url: String,
    },

    /// Show the URL behind a short code
    Get {
        /// Short code returned by the API
        short_url: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("admin requires STORAGE_BACKEND=postgres");
    }

    let pool = server::connect_pool(&config).await?;

    let result = match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool, &config).await,
        Commands::Stats => handle_stats(&pool, &config).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

fn url_service(pool: &PgPool, config: &Config) -> UrlService {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    server::build_url_service(repository, config)
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = url_service(pool, config);

    match action {
        UrlAction::Add { url } => add_url(&service, &url).await,
        UrlAction::Get { short_url } => get_url(&service, &short_url).await,
    }
}

/// Runs the full shortening flow and prints the short code.
async fn add_url(service: &UrlService, url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    match service.shorten(url).await {
        Ok(record) => {
            println!("  URL:        {}", record.original_url.cyan());
            println!("  Short code: {}", record.short_code().bright_yellow().bold());
            println!();
            println!(
                "  Resolve with: {} /api/shorturl/{}",
                "GET".bright_cyan(),
                record.short_code()
            );
            println!();
            Ok(())
        }
        Err(AppError::InvalidUrl(reason)) => {
            println!("{} {}", "❌ Rejected:".red().bold(), reason);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

/// Looks up a short code and prints the stored URL.
async fn get_url(service: &UrlService, short_url: &str) -> Result<()> {
    println!("{}", "🔎 Resolve Short Code".bright_blue().bold());
    println!();

    match service.resolve(short_url).await {
        Ok(record) => {
            println!("  Short code: {}", record.short_code().bright_black());
            println!("  URL:        {}", record.original_url.cyan());
        }
        Err(AppError::MalformedId(_)) => {
            println!("{}", "⚠️  Not a valid short code".yellow());
        }
        Err(AppError::NotFound(_)) => {
            println!("{}", "⚠️  No URL stored for this code".yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    println!();
    Ok(())
}

/// Displays the number of stored URLs.
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = url_service(pool, config)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    println!(
        "  Stored URLs: {}",
        count.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            server::migrate(pool).await?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
