//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlRecord;

/// Body of `POST /api/shorturl`, accepted as JSON or form data.
///
/// `url` is optional at the deserialization level so a missing field is
/// reported as an invalid URL rather than as a framework rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlRecord> for ShortenResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            short_url: record.short_code(),
            original_url: record.original_url,
        }
    }
}
