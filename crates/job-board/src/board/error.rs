use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::storage::{RepositoryError, ResourceId};

/// Error raised by the job and application services.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{resource} '{id}' not found")]
    NotFound {
        resource: &'static str,
        id: ResourceId,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BoardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BoardError::Validation(_) => StatusCode::BAD_REQUEST,
            BoardError::NotFound { .. } => StatusCode::NOT_FOUND,
            BoardError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            BoardError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "storage failure while serving request");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
