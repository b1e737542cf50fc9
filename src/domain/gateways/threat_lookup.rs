//! Third-party threat-intelligence lookup.

use async_trait::async_trait;

/// The lookup could not produce a verdict.
#[derive(Debug, thiserror::Error)]
pub enum ThreatLookupError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("threat service responded with status {0}")]
    Service(u16),

    #[error("invalid threat service response: {0}")]
    InvalidResponse(String),
}

/// Reports whether a URL matches any known threat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreatLookup: Send + Sync {
    /// Returns `Ok(true)` when at least one threat match exists for `url`.
    async fn has_threat_match(&self, url: &str) -> Result<bool, ThreatLookupError>;
}
