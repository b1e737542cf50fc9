//! Utility functions for slug generation, URL processing and database errors.
//!
//! - [`code_generator`] - Slug/id generation and slug format validation
//! - [`url_normalizer`] - Scheme normalization for destination URLs
//! - [`db_error`] - Classification of PostgreSQL errors

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
