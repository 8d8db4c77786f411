//! Repository trait for the short URL mapping store.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// A single collection keyed by a store-generated identifier holding one
/// field, the original URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record whose `original_url` equals `url` exactly.
    ///
    /// No normalization is applied: trailing slashes, letter case and query
    /// order all produce distinct URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Creates a new record with a store-assigned identifier.
    ///
    /// No uniqueness is enforced; callers look up before inserting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, url: &str) -> Result<UrlRecord, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if the code is well-formed but unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedId`] if `id` is not a valid identifier.
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
