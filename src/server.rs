//! HTTP server initialization and runtime setup.
//!
//! Owns the lifecycle of the store connection: it is opened here, injected
//! into the repository, and closed after the server has drained.

use crate::application::services::{UrlService, UrlValidator};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::dns::TokioHostResolver;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies the embedded migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to migrate")?;
    Ok(())
}

/// Builds the URL service on top of `repository` with the system resolver.
pub fn build_url_service(repository: Arc<dyn UrlRepository>, config: &Config) -> UrlService {
    let validator = UrlValidator::new(Arc::new(TokioHostResolver), config.dns_timeout());
    UrlService::new(repository, validator)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage (PostgreSQL pool + migrations, or the in-memory store)
/// - URL validator with the system resolver
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool): (Arc<dyn UrlRepository>, Option<PgPool>) =
        match config.storage_backend {
            StorageBackend::Postgres => {
                let pool = connect_pool(&config).await?;
                tracing::info!("Connected to database");

                if config.run_migrations {
                    migrate(&pool).await?;
                    tracing::info!("Migrations applied");
                }

                let repository: Arc<dyn UrlRepository> =
                    Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
                (repository, Some(pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, records are lost on restart");
                let repository: Arc<dyn UrlRepository> = Arc::new(MemoryUrlRepository::new());
                (repository, None)
            }
        };

    let url_service = Arc::new(build_url_service(repository, &config));
    let state = AppState::new(url_service);

    let app = app_router(state, &config.public_dir, &config.views_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
