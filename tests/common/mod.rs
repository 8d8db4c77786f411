#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::collections::HashSet;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use shorturl_service::application::services::{UrlService, UrlValidator};
use shorturl_service::domain::entities::{UrlRecord, parse_record_id};
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::domain::resolver::HostResolver;
use shorturl_service::error::AppError;
use shorturl_service::infrastructure::persistence::MemoryUrlRepository;
use axum::ServiceExt;
use axum::extract::Request;
use axum::routing::IntoMakeService;
use shorturl_service::routes::{app_router, build_router};
use tower_http::normalize_path::NormalizePath;
use shorturl_service::state::AppState;

/// Hosts the test resolver knows about. Everything else is NXDOMAIN.
pub const KNOWN_HOSTS: &[&str] = &["www.freecodecamp.org", "example.com", "www.example.com"];

/// Resolver answering from a fixed host list, so tests never hit the network.
pub struct StaticResolver {
    known: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            known: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if self.known.contains(host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "failed to lookup address information: Name or service not known",
            ))
        }
    }
}

/// Resolver that never answers within any sane timeout.
pub struct HangingResolver;

#[async_trait]
impl HostResolver for HangingResolver {
    async fn resolve(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
    }
}

/// Repository whose every operation fails like a lost connection.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn find_by_url(&self, _url: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn insert(&self, _url: &str) -> Result<UrlRecord, AppError> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        parse_record_id(id)?;
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Storage(sqlx::Error::PoolClosed))
    }
}

pub fn create_state(
    repository: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
) -> AppState {
    let validator = UrlValidator::new(resolver, dns_timeout);
    AppState::new(Arc::new(UrlService::new(repository, validator)))
}

/// State over a fresh in-memory store and the static resolver.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = create_state(
        repository.clone(),
        Arc::new(StaticResolver::new(KNOWN_HOSTS)),
        Duration::from_secs(1),
    );
    (state, repository)
}

/// The full application router over `state`, with the bundled static files.
pub fn test_app(state: AppState) -> Router {
    build_router(
        state,
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/views"),
    )
}

/// The router as the server runs it, including trailing slash trimming.
pub fn served_app(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    let app = app_router(
        state,
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/views"),
    );
    ServiceExt::<Request>::into_make_service(app)
}
