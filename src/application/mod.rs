//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! outbound checks and lifecycle rules, and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link lifecycle (create, read, delete, count views)
//! - [`services::url_check_service::UrlCheckService`] - Reachability and safety screening

pub mod services;
