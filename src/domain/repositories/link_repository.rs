//! Repository trait for link persistence.

use crate::domain::entities::{Link, LinkTarget, NewLink};
use async_trait::async_trait;

/// Errors reported by link stores.
///
/// These never reach API callers verbatim; the lifecycle engine translates
/// them into generic reasons.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A link with the same slug already exists (deleted or not).
    #[error("slug already exists")]
    DuplicateSlug,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for links.
///
/// Mutations on an existing link are conditional: they apply only while the
/// link is still active and report whether they changed anything, so callers
/// never need a read-check-write sequence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new active link with a zero view count.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateSlug`] if the slug was ever used before.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds a link by id. `Ok(None)` when no such link exists.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, StoreError>;

    /// Finds the destination and deletion state of a link by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkTarget>, StoreError>;

    /// Sets `deleted_at = now()` if the link exists and is not deleted yet.
    ///
    /// Returns `Ok(true)` only for the call that performed the transition.
    async fn soft_delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Increments `view_count` by one if the link exists and is not deleted.
    ///
    /// Returns `Ok(true)` if a counter was incremented.
    async fn increment_views(&self, slug: &str) -> Result<bool, StoreError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
