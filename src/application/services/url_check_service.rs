//! Reachability and safety screening of destination URLs.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::errors::{ReachabilityError, SafetyError};
use crate::domain::gateways::{ReachabilityProbe, ThreatLookup};

/// Classifies probe and threat-lookup outcomes into user-facing reasons.
///
/// Each check is bounded by its own timeout regardless of the timeouts
/// configured on the underlying clients. Raw transport errors are logged
/// and never returned.
pub struct UrlCheckService {
    probe: Arc<dyn ReachabilityProbe>,
    threats: Arc<dyn ThreatLookup>,
    probe_timeout: Duration,
    safety_timeout: Duration,
}

impl UrlCheckService {
    pub fn new(
        probe: Arc<dyn ReachabilityProbe>,
        threats: Arc<dyn ThreatLookup>,
        probe_timeout: Duration,
        safety_timeout: Duration,
    ) -> Self {
        Self {
            probe,
            threats,
            probe_timeout,
            safety_timeout,
        }
    }

    /// Confirms the URL answers a `HEAD` request with a 2xx status.
    ///
    /// # Errors
    ///
    /// - [`ReachabilityError::BadStatus`] for any non-2xx status
    /// - [`ReachabilityError::Unreachable`] for transport failures and timeouts
    pub async fn check_reachable(&self, url: &str) -> Result<(), ReachabilityError> {
        match timeout(self.probe_timeout, self.probe.head(url)).await {
            Ok(Ok(response)) if response.is_success() => Ok(()),
            Ok(Ok(response)) => {
                debug!(url, status = response.status, "Destination returned non-success status");
                Err(ReachabilityError::BadStatus {
                    status: response.status,
                    reason: response.reason,
                })
            }
            Ok(Err(e)) => {
                debug!(url, error = %e, "Destination probe failed");
                Err(ReachabilityError::Unreachable)
            }
            Err(_) => {
                debug!(url, timeout_ms = self.probe_timeout.as_millis() as u64, "Destination probe timed out");
                Err(ReachabilityError::Unreachable)
            }
        }
    }

    /// Confirms the threat service reports no match for the URL.
    ///
    /// Fails closed: a lookup that errors or times out is a rejection.
    ///
    /// # Errors
    ///
    /// - [`SafetyError::Unsafe`] if any threat match exists
    /// - [`SafetyError::Unverified`] if the lookup failed or timed out
    pub async fn check_safe(&self, url: &str) -> Result<(), SafetyError> {
        match timeout(self.safety_timeout, self.threats.has_threat_match(url)).await {
            Ok(Ok(false)) => Ok(()),
            Ok(Ok(true)) => {
                warn!(url, "Rejected unsafe destination");
                Err(SafetyError::Unsafe)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Threat lookup failed");
                Err(SafetyError::Unverified)
            }
            Err(_) => {
                warn!(timeout_ms = self.safety_timeout.as_millis() as u64, "Threat lookup timed out");
                Err(SafetyError::Unverified)
            }
        }
    }
}
