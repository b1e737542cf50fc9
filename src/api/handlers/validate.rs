//! Handlers for the pre-flight validation endpoints used by forms.
//!
//! Both answer 200 with `{}` or `{"error": reason}`. Only a store failure
//! turns into an error response.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::validate::{ValidateSlugRequest, ValidateUrlRequest, ValidationResponse};
use crate::domain::errors::LinkError;
use crate::error::AppError;
use crate::state::AppState;

/// `POST /slug/validate`: format and availability of a slug.
pub async fn validate_slug_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateSlugRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(payload) = payload?;

    let outcome = state.link_service.check_slug(&payload.slug).await;

    as_validation(outcome)
}

/// `POST /url/validate`: whether the normalized URL loads. Safety is not checked.
pub async fn validate_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateUrlRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(payload) = payload?;

    let outcome = state.link_service.check_url(&payload.url).await.map(|_| ());

    as_validation(outcome)
}

fn as_validation(outcome: Result<(), LinkError>) -> Result<Json<ValidationResponse>, AppError> {
    match outcome {
        Ok(()) => Ok(Json(ValidationResponse::valid())),
        Err(e @ LinkError::Store(_)) => Err(e.into()),
        Err(e) => Ok(Json(ValidationResponse::invalid(e.to_string()))),
    }
}
