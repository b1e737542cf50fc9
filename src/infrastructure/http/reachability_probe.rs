//! `HEAD` probe of destination URLs.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::domain::gateways::{ProbeError, ProbeResponse, ReachabilityProbe};

/// Reachability probe issuing a single `HEAD` request.
///
/// Redirects are followed (up to reqwest's default limit), so the reported
/// status is the one of the final hop.
pub struct HttpReachabilityProbe {
    client: Client,
}

impl HttpReachabilityProbe {
    /// Builds a probe whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachabilityProbe {
    async fn head(&self, url: &str) -> Result<ProbeResponse, ProbeError> {
        let url = Url::parse(url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;

        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status = response.status();

        Ok(ProbeResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}
