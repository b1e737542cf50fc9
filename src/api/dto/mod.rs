//! Data Transfer Objects for API requests and responses.
//!
//! Link payloads use camelCase field names; all DTOs are plain Serde types.

pub mod health;
pub mod link;
pub mod validate;
