//! Handlers for slug resolution and view counting.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::UrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the destination of an active link.
///
/// # Endpoint
///
/// `GET /url/{slug}`
///
/// # Errors
///
/// - 404 if the slug is unknown
/// - 410 if the link has been deleted
pub async fn get_url_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<UrlResponse>, AppError> {
    let url = state.link_service.resolve_destination(&slug).await?;

    Ok(Json(UrlResponse { url }))
}

/// Counts one view of an active link.
///
/// # Endpoint
///
/// `PUT /url/{slug}/views`
///
/// Applied synchronously, unlike views counted by the redirect route.
///
/// # Errors
///
/// - 404 if the slug is unknown
/// - 410 if the link has been deleted
pub async fn count_view_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.count_view(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}
