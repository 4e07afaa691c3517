//! JSON body types shared by handlers and error mapping.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::fmt::Display;

/// `{"message": ...}`: confirmations and client errors.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody {
            message: message.into(),
        }
    }
}

/// Server-error body: a human-readable message plus the underlying error text.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: &str, error: &dyn Display) -> Self {
        ErrorBody {
            message: message.to_string(),
            error: error.to_string(),
        }
    }
}

/// 200 with `{"message": ...}`, used as the confirmation for update and delete.
pub fn confirmation(message: &str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody::new(message)))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
