use shorturl_service::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive string (the value of `RUST_LOG`);
/// `log_format` selects human-readable `text` or structured `json` output.
fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}
