//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Lifecycle error taxonomy and reason strings
//! - [`repositories`] - Storage contract
//! - [`gateways`] - Reachability probe and threat lookup contracts
//! - [`view_event`] - View counting event model
//! - [`view_worker`] - Asynchronous view counting worker
//!
//! # View Counting Flow
//!
//! 1. Redirect handler resolves the destination of an active link
//! 2. [`view_event::ViewEvent`] is sent to a bounded channel (non-blocking)
//! 3. [`view_worker::run_view_worker`] applies a conditional increment with retry
//! 4. Failures are logged and dropped; the redirect has already been served

pub mod entities;
pub mod errors;
pub mod gateways;
pub mod repositories;
pub mod view_event;
pub mod view_worker;
