//! Short URL creation and resolution service.

use std::sync::Arc;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Service for shortening URLs and resolving short codes.
///
/// Validates submissions before they reach the store and deduplicates by
/// looking up an existing record before inserting. The lookup and insert are
/// two separate store operations, so concurrent identical submissions may
/// still create two records.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    validator: UrlValidator,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, validator: UrlValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validates `raw_url` and returns the record that maps to it.
    ///
    /// Reuses an existing record for the exact same URL, otherwise inserts
    /// a new one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation fails (no record is
    /// created). Returns [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlRecord, AppError> {
        let validated = self.validator.validate(raw_url).await?;

        if let Some(existing) = self.repository.find_by_url(validated.as_str()).await? {
            tracing::debug!(id = %existing.id, "reusing existing record");
            return Ok(existing);
        }

        let record = self.repository.insert(validated.as_str()).await?;
        tracing::info!(id = %record.id, url = %record.original_url, "short url created");

        Ok(record)
    }

    /// Resolves a short code to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedId`] if `short_code` has the wrong format,
    /// [`AppError::NotFound`] if no record matches it.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_id(short_code)
            .await?
            .ok_or_else(|| AppError::NotFound(short_code.to_string()))
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the underlying store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if it is not.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
