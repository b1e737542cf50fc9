//! Outbound HTTP integrations built on `reqwest`.
//!
//! - [`HttpReachabilityProbe`] - `HEAD` probe of destination URLs
//! - [`SafeBrowsingClient`] - Google Safe Browsing v4 threat lookup

pub mod reachability_probe;
pub mod safe_browsing;

pub use reachability_probe::HttpReachabilityProbe;
pub use safe_browsing::{DEFAULT_SAFE_BROWSING_URL, SafeBrowsingClient};
