//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod urls;
pub mod validate;

pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, get_link_handler};
pub use redirect::redirect_handler;
pub use urls::{count_view_handler, get_url_handler};
pub use validate::{validate_slug_handler, validate_url_handler};
