//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - Short URL mapping store
//!
//! # Testing
//!
//! See integration tests in `tests/repository_url.rs` for usage examples.

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
