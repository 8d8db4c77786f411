//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State shared by all request handlers.
///
/// Built once at startup by [`crate::server::run`]; the store connection
/// lives inside the service's repository and is released when the last
/// clone of the state is dropped.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>) -> Self {
        Self { url_service }
    }
}
