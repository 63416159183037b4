use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use eventcast_core::event::EventError;
use eventcast_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::forecast::ForecastServiceError;

/// JSON error body returned by every API endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub title: String,
    pub status: u16,
    pub message: String,
}

/// A request body or query that could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InvalidRequest(pub String);

/// Handler error that maps domain errors onto HTTP statuses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

fn repository_status(error: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<ForecastServiceError>() {
            return match err {
                ForecastServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ForecastServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ForecastServiceError::Provider(_) => StatusCode::BAD_GATEWAY,
                ForecastServiceError::Repository(repo_error) => repository_status(repo_error),
            };
        }
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(repo_error);
        }
        if self.0.downcast_ref::<EventError>().is_some()
            || self.0.downcast_ref::<InvalidRequest>().is_some()
        {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        let body = ErrorBody {
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            status: status.as_u16(),
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
