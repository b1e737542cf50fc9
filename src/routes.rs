//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check: link store and view queue
//! - `GET  /{slug}`   - Short link redirect
//! - everything in [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Restricted to `APP_ORIGIN` when configured
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `allowed_origin` is the only origin accepted by CORS; `None` allows any.
pub fn app_router(state: AppState, allowed_origin: Option<HeaderValue>) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{slug}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origin))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
