use thiserror::Error;

use eventcast_core::event::{EventError, EventId};
use eventcast_core::forecast::ProviderError;
use eventcast_core::storage::RepositoryError;

/// Errors surfaced by [`ForecastService`](super::ForecastService).
#[derive(Debug, Error)]
pub enum ForecastServiceError {
    #[error("Event not found: {id}")]
    NotFound { id: EventId },

    #[error(transparent)]
    Validation(#[from] EventError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
