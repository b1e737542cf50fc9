//! Header-only probe of a destination URL.

use async_trait::async_trait;

/// Status line returned by the probed server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Canonical status text, e.g. `Not Found`. Empty for unknown codes.
    pub reason: String,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The probe never produced a status line.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Issues a `HEAD` request and reports the status without reading a body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError>;
}
