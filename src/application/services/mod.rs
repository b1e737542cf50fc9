//! Business logic services for the application layer.

pub mod link_service;
pub mod url_check_service;

pub use link_service::{LinkService, slug_availability};
pub use url_check_service::UrlCheckService;
