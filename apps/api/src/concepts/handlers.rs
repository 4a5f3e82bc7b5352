//! Axum route handlers for the Concepts API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::concepts::remix::{remix_concept, RemixRequest};
use crate::errors::AppError;
use crate::models::concept::ConceptRow;
use crate::state::AppState;

/// POST /api/v1/concepts/remix
///
/// Generates and stores a new concept for an existing audience.
pub async fn handle_remix_concept(
    State(state): State<AppState>,
    payload: Result<Json<RemixRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ConceptRow>), AppError> {
    let Json(request) = payload?;
    let concept = remix_concept(state.store.as_ref(), &state.producer, request).await?;
    Ok((StatusCode::CREATED, Json(concept)))
}
