//! Typed errors and HTTP mapping.

use crate::response::{ErrorBody, MessageBody};
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store backend: {0} (expected postgres or memory)")]
    UnknownBackend(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed body, empty required field or non-integer identifier.
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Store failure surfaced verbatim; `message` names the operation that failed.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn persistence(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Persistence { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::Validation(message) | AppError::NotFound(message) => {
                (status, Json(MessageBody::new(message))).into_response()
            }
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (status, Json(ErrorBody::new(message, &source))).into_response()
            }
        }
    }
}
