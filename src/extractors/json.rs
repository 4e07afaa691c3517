//! JSON body extractor whose rejection is a `400 {"message": "Cannot parse JSON"}`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

pub const PARSE_FAILURE: &str = "Cannot parse JSON";

/// Like `axum::Json`, but syntax errors, shape mismatches, bodies over the
/// `DefaultBodyLimit` and a missing or wrong content type all reject with
/// `AppError::Validation`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                Err(AppError::Validation(PARSE_FAILURE.into()))
            }
        }
    }
}
