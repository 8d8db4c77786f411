//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{UrlRecord, parse_record_id};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: Uuid,
    original_url: String,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.original_url)
    }
}

/// PostgreSQL repository for URL mappings.
///
/// Identifiers come from the `gen_random_uuid()` column default. Queries are
/// bound parameters, checked at runtime.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "SELECT id, original_url FROM urls WHERE original_url = $1 LIMIT 1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert(&self, url: &str) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            "INSERT INTO urls (original_url) VALUES ($1) RETURNING id, original_url",
        )
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlRecord>, AppError> {
        let id = parse_record_id(id)?;

        let row = sqlx::query_as::<_, UrlRow>("SELECT id, original_url FROM urls WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
