//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for `POST /link`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,

    /// Requested slug; missing or empty means a random one.
    #[serde(default)]
    pub slug: Option<String>,
}

/// Full link as returned by `POST /link` and `GET /link/{id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub slug: String,
    pub url: String,
    pub view_count: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            created_at: link.created_at,
            deleted_at: link.deleted_at,
            slug: link.slug,
            url: link.url,
            view_count: link.view_count,
        }
    }
}

/// Destination of an active link, returned by `GET /url/{slug}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: String,
}
