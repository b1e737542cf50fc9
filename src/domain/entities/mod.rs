//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! `New*` struct, and read-side projections (such as [`LinkTarget`]) carry
//! only the fields their callers need.

pub mod link;

pub use link::{Link, LinkTarget, NewLink};
