//! API route configuration.

use crate::api::handlers::{
    count_view_handler, create_link_handler, delete_link_handler, get_link_handler,
    get_url_handler, validate_slug_handler, validate_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// JSON API consumed by the front end.
///
/// # Endpoints
///
/// - `POST   /link`              - Create a link
/// - `GET    /link/{id}`         - Link details, or `null`
/// - `DELETE /link/{id}`         - Soft-delete a link
/// - `POST   /slug/validate`     - Check slug format and availability
/// - `POST   /url/validate`      - Check that a URL loads
/// - `GET    /url/{slug}`        - Destination of an active link
/// - `PUT    /url/{slug}/views`  - Count a view
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/link", post(create_link_handler))
        .route(
            "/link/{id}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/slug/validate", post(validate_slug_handler))
        .route("/url/validate", post(validate_url_handler))
        .route("/url/{slug}", get(get_url_handler))
        .route("/url/{slug}/views", put(count_view_handler))
}
