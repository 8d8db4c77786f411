//! URL record entity representing a short code to URL mapping.

use uuid::Uuid;

use crate::error::AppError;

/// A stored URL mapping.
///
/// The `id` is assigned by the store when the record is created and is
/// exposed unchanged as the public short code. Records are never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: Uuid,
    pub original_url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: Uuid, original_url: String) -> Self {
        Self { id, original_url }
    }

    /// Returns the public short code for this record.
    ///
    /// Uses the canonical lowercase hyphenated form of the identifier.
    pub fn short_code(&self) -> String {
        self.id.hyphenated().to_string()
    }
}

/// Parses a short code into a record identifier.
///
/// Accepts every textual UUID form understood by [`Uuid::try_parse`]
/// (hyphenated, simple, braced and URN), so a short code is matched
/// regardless of letter case.
///
/// # Errors
///
/// Returns [`AppError::MalformedId`] if `code` is not a syntactically valid
/// identifier. This is distinct from a well-formed code with no record.
pub fn parse_record_id(code: &str) -> Result<Uuid, AppError> {
    Uuid::try_parse(code).map_err(|_| AppError::MalformedId(code.to_string()))
}
