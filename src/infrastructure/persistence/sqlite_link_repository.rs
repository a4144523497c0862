//! SQLite implementation of the link repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// SQLite repository for link storage and retrieval.
///
/// Uses bound parameters throughout for SQL injection protection. Short name
/// uniqueness is enforced by the `UNIQUE` constraint on the `links` table;
/// constraint violations surface as [`AppError::Conflict`] via the
/// `From<sqlx::Error>` conversion.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Raw row shape shared by every query in this module.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_name: String,
    created_at: NaiveDateTime,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            original_url: row.original_url,
            short_name: row.short_name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO links (original_url, short_name)
            VALUES (?1, ?2)
            RETURNING id, original_url, short_name, created_at
            "#,
        )
        .bind(&new_link.original_url)
        .bind(&new_link.short_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT id, original_url, short_name, created_at FROM links WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_short_name(&self, short_name: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            "SELECT id, original_url, short_name, created_at FROM links WHERE short_name = ?1",
        )
        .bind(short_name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, original_url, short_name, created_at
            FROM links
            ORDER BY id
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: LinkPatch) -> Result<Option<Link>, AppError> {
        // COALESCE keeps the stored value for fields the patch leaves unset.
        // Updating a row to its own short_name does not violate the unique
        // constraint, so a no-op rename never conflicts with itself.
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            UPDATE links
            SET original_url = COALESCE(?1, original_url),
                short_name = COALESCE(?2, short_name)
            WHERE id = ?3
            RETURNING id, original_url, short_name, created_at
            "#,
        )
        .bind(&patch.original_url)
        .bind(&patch.short_name)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let affected = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}
