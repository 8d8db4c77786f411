//! In-process implementation of the URL repository.
//!
//! Used for local runs without PostgreSQL (`STORAGE_BACKEND=memory`) and by
//! the HTTP integration tests. Contents are lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{UrlRecord, parse_record_id};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// URL repository backed by a `HashMap` behind a `RwLock`.
///
/// Identifiers are random v4 UUIDs, the same format PostgreSQL generates,
/// so short codes look identical on both backends.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: RwLock<HashMap<Uuid, String>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let records = self.records.read().await;

        Ok(records
            .iter()
            .find(|(_, original_url)| original_url.as_str() == url)
            .map(|(id, original_url)| UrlRecord::new(*id, original_url.clone())))
    }

    async fn insert(&self, url: &str) -> Result<UrlRecord, AppError> {
        let mut records = self.records.write().await;

        let mut id = Uuid::new_v4();
        while records.contains_key(&id) {
            id = Uuid::new_v4();
        }
        records.insert(id, url.to_string());

        Ok(UrlRecord::new(id, url.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        let id = parse_record_id(id)?;
        let records = self.records.read().await;

        Ok(records
            .get(&id)
            .map(|original_url| UrlRecord::new(id, original_url.clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.read().await.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
