//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON (and form) serialization.

pub mod health;
pub mod shorturl;
