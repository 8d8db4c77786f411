//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by
//! [`crate::infrastructure::persistence`].
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::UrlRecord`])
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname resolution contract used by URL validation

pub mod entities;
pub mod repositories;
pub mod resolver;
