//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Reachability probe and Safe Browsing client
//! - [`persistence`] - PostgreSQL and in-memory repository implementations

pub mod http;
pub mod persistence;
