//! JSON body extractor with unified errors
//!
//! `axum::Json` rejects bad bodies with a plain-text response. Here the
//! rejection becomes an [`AppError`] so every failure leaves the service
//! as an `{"error": ..., "code": ...}` body. Body problems are
//! uncategorized failures (500) carrying the rejection text.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use shared::AppError;

/// JSON request body, rejected as [`AppError`]
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
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(AppError::internal(rejection.body_text())),
        }
    }
}
