//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use crate::domain::view_event::ViewEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its destination.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # View Counting
///
/// A view event is queued for the background worker after the destination
/// is resolved. If the queue is full the view is dropped; the redirect is
/// never delayed by counting.
///
/// # Errors
///
/// Returns 404 Not Found for unknown slugs and 410 Gone for deleted links.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve_destination(&slug).await?;

    match state.view_sender.try_send(ViewEvent::new(slug)) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            warn!(slug = %event.slug, "View queue full, dropping view");
        }
        Err(TrySendError::Closed(event)) => {
            warn!(slug = %event.slug, "View queue closed, dropping view");
        }
    }

    Ok(Redirect::temporary(&url))
}
