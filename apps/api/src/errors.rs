use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::ideas::lifecycle::{IdeaStatus, LifecycleError};
use crate::ideas::scoring::ScoreError;
use crate::validation::FormErrors;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed: {}", .0.summary())]
    InvalidForm(FormErrors),

    #[error(transparent)]
    Scoring(#[from] ScoreError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("Idea {id} is no longer '{expected}'; it changed concurrently")]
    StatusConflict { id: Uuid, expected: IdeaStatus },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details: Option<Value> = None;

        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidForm(form) => {
                details = Some(json!(form.errors));
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Please fix the errors in the form".to_string(),
                )
            }
            AppError::Scoring(ScoreError::IncompleteAssessment { missing }) => {
                details = Some(json!(missing));
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INCOMPLETE_ASSESSMENT",
                    self.to_string(),
                )
            }
            AppError::Lifecycle(LifecycleError::NoNextStage { .. }) => {
                (StatusCode::CONFLICT, "NO_NEXT_STAGE", self.to_string())
            }
            AppError::StatusConflict { .. } => {
                tracing::warn!("{self}");
                (StatusCode::CONFLICT, "STATUS_CONFLICT", self.to_string())
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_assessment_is_unprocessable() {
        let err: AppError = ScoreError::IncompleteAssessment {
            missing: vec!["business_growth"],
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_no_next_stage_is_conflict() {
        let err: AppError = LifecycleError::NoNextStage {
            status: IdeaStatus::Scaling,
        }
        .into();
        assert!(err.to_string().contains("scaling"));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_form_is_bad_request() {
        let mut form = FormErrors::new();
        form.push("title", "Idea name is required");
        assert_eq!(
            AppError::InvalidForm(form).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
