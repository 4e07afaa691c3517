//! Raw `{id}` path segment whose rejection is a `400 {"message": "Invalid supplier ID"}`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const INVALID_ID: &str = "Invalid supplier ID";

/// The id segment as text; integer parsing happens in the service. Segments axum
/// cannot decode (invalid UTF-8 after percent-decoding) reject with `AppError::Validation`.
#[derive(Debug, Clone)]
pub struct SupplierIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SupplierIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(SupplierIdPath(id)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected id segment");
                Err(AppError::Validation(INVALID_ID.into()))
            }
        }
    }
}
