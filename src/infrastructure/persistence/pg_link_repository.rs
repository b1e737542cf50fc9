//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::is_unique_violation_on_slug;

/// PostgreSQL repository for link storage.
///
/// Conditional mutations are single `UPDATE ... WHERE deleted_at IS NULL`
/// statements. Under `READ COMMITTED` a concurrent writer blocks on the row
/// lock and re-evaluates the predicate after the first commit, so only one
/// soft delete per link can report a changed row.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: String,
    slug: String,
    url: String,
    view_count: i64,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.slug, r.url, r.view_count, r.created_at, r.deleted_at)
    }
}

#[derive(sqlx::FromRow)]
struct TargetRow {
    url: String,
    deleted_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (id, slug, url)
            VALUES ($1, $2, $3)
            RETURNING id, slug, url, view_count, created_at, deleted_at
            "#,
        )
        .bind(&new_link.id)
        .bind(&new_link.slug)
        .bind(&new_link.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_slug(&e) {
                StoreError::DuplicateSlug
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, StoreError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, slug, url, view_count, created_at, deleted_at
            FROM links
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkTarget>, StoreError> {
        let row = sqlx::query_as::<_, TargetRow>(
            "SELECT url, deleted_at FROM links WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| LinkTarget {
            url: r.url,
            deleted_at: r.deleted_at,
        }))
    }

    async fn soft_delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE links SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_views(&self, slug: &str) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE links SET view_count = view_count + 1 WHERE slug = $1 AND deleted_at IS NULL",
        )
        .bind(slug)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
