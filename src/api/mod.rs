//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses
//! according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Form-or-JSON body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
