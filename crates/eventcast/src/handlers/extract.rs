//! Request extractors whose rejections use the API error body.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use super::{error::InvalidRequest, AppError};

/// JSON body extractor that rejects with a 400 [`AppError`] instead of
/// axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
                Err(InvalidRequest(rejection.body_text()).into())
            }
        }
    }
}
