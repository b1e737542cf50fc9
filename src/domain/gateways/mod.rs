//! Trait definitions for outbound checks run before a link is created.
//!
//! Implementations live in `crate::infrastructure::http`. Both traits report
//! raw transport outcomes; classifying them into user-facing reasons is the
//! job of [`crate::application::services::UrlCheckService`].

pub mod reachability;
pub mod threat_lookup;

pub use reachability::{ProbeError, ProbeResponse, ReachabilityProbe};
pub use threat_lookup::{ThreatLookup, ThreatLookupError};

#[cfg(test)]
pub use reachability::MockReachabilityProbe;
#[cfg(test)]
pub use threat_lookup::MockThreatLookup;
