//! Axum route handlers for the Audiences API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::audiences::intake::{create_audience_and_concept, IntakeResponse};
use crate::errors::AppError;
use crate::models::audience::{AudienceRow, AudienceWithConcepts, NewAudience};
use crate::state::AppState;

/// POST /api/v1/audiences
///
/// Validates the submission, generates a concept, and stores both.
pub async fn handle_create_audience(
    State(state): State<AppState>,
    payload: Result<Json<NewAudience>, JsonRejection>,
) -> Result<(StatusCode, Json<IntakeResponse>), AppError> {
    let Json(input) = payload?;
    let response = create_audience_and_concept(state.store.as_ref(), &state.producer, input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/audiences
pub async fn handle_list_audiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<AudienceWithConcepts>>, AppError> {
    Ok(Json(state.store.list_audiences_with_concepts().await?))
}

/// GET /api/v1/audiences/:id
pub async fn handle_get_audience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AudienceRow>, AppError> {
    Ok(Json(state.store.get_audience_by_id(id).await?))
}
