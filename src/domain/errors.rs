//! Domain error taxonomy for the link lifecycle.
//!
//! The `Display` text of every variant is the user-facing reason returned to
//! callers. Callers that branch on an outcome should use [`LinkError::code`]
//! rather than parsing the text.

use crate::domain::repositories::StoreError;

/// Slug rejected by format or uniqueness checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("Slug must be at least 4 characters long")]
    TooShort,

    #[error("Slug may only contain lowercase letters or numbers")]
    InvalidCharacters,

    #[error("Slug is already in use")]
    InUse,
}

/// Destination did not answer the probe successfully.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReachabilityError {
    #[error("URL failed to load with {status}: {reason}")]
    BadStatus { status: u16, reason: String },

    /// DNS failure, refused connection, timeout or malformed URL.
    #[error("Unable to load URL")]
    Unreachable,
}

/// Destination failed the threat lookup, or the lookup itself failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SafetyError {
    #[error("URL is unsafe")]
    Unsafe,

    #[error("Unable to verify URL safety")]
    Unverified,
}

/// Outcome of a rejected lifecycle operation.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error(transparent)]
    Slug(#[from] SlugError),

    #[error(transparent)]
    Reachability(#[from] ReachabilityError),

    #[error(transparent)]
    Safety(#[from] SafetyError),

    #[error("Link not found")]
    NotFound,

    #[error("Link already deleted")]
    AlreadyDeleted,

    #[error("Link has been deleted")]
    Deleted,

    /// Insert rejected by the store, e.g. a slug claimed concurrently.
    #[error("Failed to create link")]
    CreateFailed,

    #[error("Storage unavailable")]
    Store(#[from] StoreError),
}

impl LinkError {
    /// Stable machine-readable identifier of the outcome.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Slug(SlugError::TooShort) => "slug_too_short",
            Self::Slug(SlugError::InvalidCharacters) => "slug_invalid_characters",
            Self::Slug(SlugError::InUse) => "slug_in_use",
            Self::Reachability(ReachabilityError::BadStatus { .. }) => "url_bad_status",
            Self::Reachability(ReachabilityError::Unreachable) => "url_unreachable",
            Self::Safety(SafetyError::Unsafe) => "url_unsafe",
            Self::Safety(SafetyError::Unverified) => "url_safety_unverified",
            Self::NotFound => "link_not_found",
            Self::AlreadyDeleted => "link_already_deleted",
            Self::Deleted => "link_deleted",
            Self::CreateFailed => "link_create_failed",
            Self::Store(_) => "storage_error",
        }
    }
}
