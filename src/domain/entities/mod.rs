//! Core domain entities.
//!
//! The service stores a single kind of record: [`UrlRecord`], the mapping
//! between a store-assigned identifier and the URL it was created for.

pub mod url_record;

pub use url_record::{UrlRecord, parse_record_id};
