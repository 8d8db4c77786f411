//! Application error type and its HTTP mapping.
//!
//! Internally every failure keeps its precise kind. At the HTTP boundary all
//! of them collapse into one client contract: status `200` with the body
//! `{"error": "invalid url"}`. The precise kind is logged instead.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

/// The only error message clients ever see.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// Uniform error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl ErrorBody {
    pub fn invalid_url() -> Self {
        Self {
            error: INVALID_URL_MESSAGE,
        }
    }
}

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlRejection {
    #[error("request body has no readable `url` field: {0}")]
    MissingField(String),

    #[error("malformed URL: {0}")]
    Malformed(#[from] url::ParseError),

    #[error("unsupported scheme `{0}`, only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("host `{host}` does not resolve: {reason}")]
    Unresolvable { host: String, reason: String },

    #[error("stored URL `{0}` cannot be used as a redirect target")]
    NotRedirectable(String),

    #[error("DNS lookup for `{host}` timed out after {timeout:?}")]
    DnsTimeout { host: String, timeout: Duration },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] UrlRejection),

    #[error("malformed identifier `{0}`")]
    MalformedId(String),

    #[error("no record for identifier `{0}`")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    /// Returns true if the failure was caused by the client's input rather
    /// than by the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AppError::Storage(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "request rejected");
        } else {
            tracing::warn!(error = %self, "storage operation failed");
        }

        (StatusCode::OK, Json(ErrorBody::invalid_url())).into_response()
    }
}
