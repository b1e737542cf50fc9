//! Link lifecycle service: creation, lookup, deletion and view counting.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::services::UrlCheckService;
use crate::domain::entities::{Link, LinkTarget, NewLink};
use crate::domain::errors::{LinkError, SlugError};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::{
    generate_link_id, generate_slug, is_reserved_slug, validate_slug_format,
};
use crate::utils::url_normalizer::with_scheme;

/// Attempts at drawing an unused random slug before giving up.
const MAX_SLUG_ATTEMPTS: usize = 10;

/// Service implementing the link lifecycle.
///
/// Creation runs every check in a fixed order and stops at the first
/// failure. Deletion and view counting rely on the repository's conditional
/// writes; a follow-up read happens only to explain a write that did not
/// apply.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    url_checks: Arc<UrlCheckService>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, url_checks: Arc<UrlCheckService>) -> Self {
        Self {
            link_repository,
            url_checks,
        }
    }

    /// Creates a link to `url` under `slug`, or under a random slug when
    /// `slug` is `None` or empty.
    ///
    /// # Check Order
    ///
    /// 1. Slug format and availability
    /// 2. Scheme normalization (`google.com` becomes `http://google.com`)
    /// 3. Reachability of the normalized URL
    /// 4. Safety of the normalized URL
    ///
    /// # Errors
    ///
    /// Returns the first failing check as [`LinkError::Slug`],
    /// [`LinkError::Reachability`] or [`LinkError::Safety`]. Returns
    /// [`LinkError::CreateFailed`] if the store rejects the insert, e.g. when
    /// the slug was taken concurrently.
    pub async fn create_link(&self, url: &str, slug: Option<&str>) -> Result<Link, LinkError> {
        let slug = match slug.filter(|s| !s.is_empty()) {
            Some(requested) => {
                self.check_slug(requested).await?;
                requested.to_string()
            }
            None => self.generate_unique_slug().await?,
        };

        let url = with_scheme(url);
        self.url_checks.check_reachable(&url).await?;
        self.url_checks.check_safe(&url).await?;

        let new_link = NewLink {
            id: generate_link_id(),
            slug,
            url,
        };

        let link = self.link_repository.insert(new_link).await.map_err(|e| {
            error!(error = %e, "Failed to insert link");
            LinkError::CreateFailed
        })?;

        info!(id = %link.id, slug = %link.slug, "Link created");
        Ok(link)
    }

    /// Validates a slug's format, then its availability.
    ///
    /// See [`slug_availability`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Slug`] with the first failing rule, or
    /// [`LinkError::Store`] if the availability lookup fails.
    pub async fn check_slug(&self, slug: &str) -> Result<(), LinkError> {
        slug_availability(self.link_repository.as_ref(), slug).await
    }

    /// Normalizes `url` and checks that it is reachable.
    ///
    /// Returns the normalized URL. Safety is not checked here.
    pub async fn check_url(&self, url: &str) -> Result<String, LinkError> {
        let url = with_scheme(url);
        self.url_checks.check_reachable(&url).await?;
        Ok(url)
    }

    /// Returns the full link, or `None` if no link has this id.
    pub async fn get_link(&self, id: &str) -> Result<Option<Link>, LinkError> {
        Ok(self.link_repository.find_by_id(id).await?)
    }

    /// Returns destination and deletion state, or `None` if the slug is unknown.
    pub async fn get_target(&self, slug: &str) -> Result<Option<LinkTarget>, LinkError> {
        Ok(self.link_repository.find_by_slug(slug).await?)
    }

    /// Returns the destination of an active link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] for unknown slugs and
    /// [`LinkError::Deleted`] for deleted links.
    pub async fn resolve_destination(&self, slug: &str) -> Result<String, LinkError> {
        match self.get_target(slug).await? {
            None => Err(LinkError::NotFound),
            Some(target) if target.is_deleted() => Err(LinkError::Deleted),
            Some(target) => Ok(target.url),
        }
    }

    /// Soft-deletes a link.
    ///
    /// Of several concurrent calls for the same link exactly one succeeds;
    /// the others report [`LinkError::AlreadyDeleted`].
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] for unknown ids and
    /// [`LinkError::AlreadyDeleted`] if the link was deleted before.
    pub async fn delete_link(&self, id: &str) -> Result<(), LinkError> {
        if self.link_repository.soft_delete(id).await? {
            info!(id, "Link deleted");
            return Ok(());
        }

        // Deletion is terminal and links are never removed, so this read
        // cannot contradict the failed write.
        match self.link_repository.find_by_id(id).await? {
            None => Err(LinkError::NotFound),
            Some(_) => Err(LinkError::AlreadyDeleted),
        }
    }

    /// Increments the view counter of an active link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] for unknown slugs and
    /// [`LinkError::Deleted`] if the link is deleted, including when the
    /// deletion races with this call and wins.
    pub async fn count_view(&self, slug: &str) -> Result<(), LinkError> {
        if self.link_repository.increment_views(slug).await? {
            debug!(slug, "View counted");
            return Ok(());
        }

        match self.link_repository.find_by_slug(slug).await? {
            None => Err(LinkError::NotFound),
            Some(_) => Err(LinkError::Deleted),
        }
    }

    /// Reports whether the link store answers.
    pub async fn is_store_healthy(&self) -> bool {
        self.link_repository.health_check().await
    }

    /// Draws random slugs until one is unused.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_slug(&self) -> Result<String, LinkError> {
        for _ in 0..MAX_SLUG_ATTEMPTS {
            let slug = generate_slug();
            if is_reserved_slug(&slug) {
                continue;
            }

            if self.link_repository.find_by_slug(&slug).await?.is_none() {
                return Ok(slug);
            }

            debug!(slug, "Generated slug collided, retrying");
        }

        error!("Failed to generate unique slug: too many collisions");
        Err(LinkError::CreateFailed)
    }
}

/// Validates a slug's format, then its availability in `links`.
///
/// Slugs shadowed by fixed routes and slugs that belonged to a deleted link
/// are reported as in use.
///
/// # Errors
///
/// Returns [`LinkError::Slug`] with the first failing rule, or
/// [`LinkError::Store`] if the lookup fails.
pub async fn slug_availability<L>(links: &L, slug: &str) -> Result<(), LinkError>
where
    L: LinkRepository + ?Sized,
{
    validate_slug_format(slug)?;

    if is_reserved_slug(slug) || links.find_by_slug(slug).await?.is_some() {
        return Err(SlugError::InUse.into());
    }

    Ok(())
}
