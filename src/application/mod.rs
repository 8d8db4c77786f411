//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls
//! and validation, and give HTTP handlers a small API to call.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Syntax, scheme and DNS checks
//! - [`services::url_service::UrlService`] - Shortening and short code resolution

pub mod services;
