//! Link entity mapping a slug to its destination URL.

use chrono::{DateTime, Utc};

/// A short link with its lifecycle metadata.
///
/// A link is active while `deleted_at` is `None`. Deletion is a one-way
/// transition and the slug stays reserved afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub slug: String,
    pub url: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: String,
        slug: String,
        url: String,
        view_count: i64,
        created_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            slug,
            url,
            view_count,
            created_at,
            deleted_at,
        }
    }

    /// Returns true if the link has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Reduced view used by the redirect path.
    pub fn target(&self) -> LinkTarget {
        LinkTarget {
            url: self.url.clone(),
            deleted_at: self.deleted_at,
        }
    }
}

/// Input data for persisting a new link.
///
/// The store fills in `created_at`, starts `view_count` at zero and leaves
/// `deleted_at` unset.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub slug: String,
    pub url: String,
}

/// Destination and deletion state of a link, looked up by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub url: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl LinkTarget {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
