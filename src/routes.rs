//! Top-level router configuration combining API, health and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Landing page (`VIEWS_DIR/index.html`)
//! - `GET  /public/*`                - Static assets (`PUBLIC_DIR`)
//! - `GET  /health`                  - Health check
//! - `POST /api/shorturl`            - Shorten a URL
//! - `GET  /api/shorturl/{short_url}` - Redirect to the original URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory served under `/public`
/// - `views_dir` - directory holding the landing page `index.html`
pub fn app_router(
    state: AppState,
    public_dir: impl AsRef<Path>,
    views_dir: impl AsRef<Path>,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, public_dir, views_dir))
}

/// Same as [`app_router`] without trailing slash normalization.
///
/// Path normalization has to wrap the whole router to run before routing,
/// so this inner router is what tests drive directly.
pub fn build_router(
    state: AppState,
    public_dir: impl AsRef<Path>,
    views_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(views_dir.as_ref().join("index.html")))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::shorturl_routes())
        .nest_service("/public", ServeDir::new(public_dir.as_ref()))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}
