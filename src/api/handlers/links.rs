//! Handlers for link management endpoints (create, read, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /link`
///
/// # Request Body
///
/// ```json
/// { "url": "google.com", "slug": "google" }
/// ```
///
/// `slug` may be omitted or empty to get a random one. The URL is stored
/// with a scheme (`http://google.com`).
///
/// # Errors
///
/// - 400 if the slug is malformed or the URL is unreachable or unsafe
/// - 409 if the slug is already in use
/// - 500 if the link could not be stored
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;

    let link = state
        .link_service
        .create_link(&payload.url, payload.slug.as_deref())
        .await?;

    Ok(Json(link.into()))
}

/// Returns a link by id, or `null` if there is none.
///
/// # Endpoint
///
/// `GET /link/{id}`
///
/// Deleted links are returned with `deletedAt` set.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<LinkResponse>>, AppError> {
    let link = state.link_service.get_link(&id).await?;

    Ok(Json(link.map(LinkResponse::from)))
}

/// Soft-deletes a link.
///
/// # Endpoint
///
/// `DELETE /link/{id}`
///
/// # Responses
///
/// - 204 on success
/// - 404 if no link has this id
/// - 409 if the link was already deleted
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
