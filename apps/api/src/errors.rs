use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::concepts::producer::ProducerError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Concept generation failed: {0}")]
    Producer(#[from] ProducerError),

    #[error("Store error: {0}")]
    Store(StoreError),

    /// The audience row was written but its concept was not.
    #[error("Audience {audience_id} was saved but its concept was not: {message}")]
    PartialFailure { audience_id: Uuid, message: String },
}

/// A body that is not JSON, or has a field of the wrong type, is a caller error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(format!("Audience {id} not found")),
            StoreError::PartialWrite {
                audience_id,
                source,
            } => AppError::PartialFailure {
                audience_id,
                message: source.to_string(),
            },
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Producer(e) => {
                tracing::error!("Producer error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PRODUCER_ERROR",
                    e.to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                let code = match e {
                    StoreError::Read(_) => "STORE_READ_ERROR",
                    _ => "STORE_WRITE_ERROR",
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    code,
                    "A database error occurred".to_string(),
                )
            }
            AppError::PartialFailure { .. } => {
                tracing::error!("Partial failure: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PARTIAL_FAILURE",
                    "The audience was saved but its concept could not be stored".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let mut error: Value = json!({
            "code": code,
            "message": message
        });
        if let AppError::PartialFailure { audience_id, .. } = &self {
            error["audience_id"] = json!(audience_id);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
