//! DTOs for the slug and URL validation endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ValidateSlugRequest {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateUrlRequest {
    pub url: String,
}

/// `{}` when the value passed, `{"error": reason}` otherwise.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResponse {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
        }
    }
}
