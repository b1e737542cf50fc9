//! In-process link repository backed by concurrent maps.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Link store kept entirely in memory.
///
/// Links are keyed by slug; a second map resolves ids to slugs. Conditional
/// updates hold the entry's shard lock for the whole check-and-write, which
/// gives the same single-winner guarantee as the SQL implementation.
///
/// Nothing is persisted across restarts.
#[derive(Default)]
pub struct MemoryLinkRepository {
    by_slug: DashMap<String, Link>,
    slug_by_id: DashMap<String, String>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links ever stored, deleted ones included.
    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    // Clones the slug so the id guard is released before `by_slug` is locked.
    fn slug_for_id(&self, id: &str) -> Option<String> {
        self.slug_by_id.get(id).map(|slug| slug.value().clone())
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        match self.by_slug.entry(new_link.slug.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateSlug),
            Entry::Vacant(vacant) => {
                let link = Link::new(
                    new_link.id.clone(),
                    new_link.slug.clone(),
                    new_link.url,
                    0,
                    Utc::now(),
                    None,
                );
                vacant.insert(link.clone());
                self.slug_by_id.insert(new_link.id, new_link.slug);
                Ok(link)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, StoreError> {
        let Some(slug) = self.slug_for_id(id) else {
            return Ok(None);
        };

        Ok(self.by_slug.get(&slug).map(|link| link.value().clone()))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<LinkTarget>, StoreError> {
        Ok(self.by_slug.get(slug).map(|link| link.target()))
    }

    async fn soft_delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(slug) = self.slug_for_id(id) else {
            return Ok(false);
        };

        let Some(mut link) = self.by_slug.get_mut(&slug) else {
            return Ok(false);
        };

        if link.deleted_at.is_some() {
            return Ok(false);
        }

        link.deleted_at = Some(Utc::now());
        Ok(true)
    }

    async fn increment_views(&self, slug: &str) -> Result<bool, StoreError> {
        let Some(mut link) = self.by_slug.get_mut(slug) else {
            return Ok(false);
        };

        if link.deleted_at.is_some() {
            return Ok(false);
        }

        link.view_count += 1;
        Ok(true)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
