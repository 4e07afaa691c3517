//! Presence checks on request bodies.

use crate::error::AppError;
use crate::model::SupplierPayload;

pub struct RequestValidator;

impl RequestValidator {
    /// Create requires a non-empty name.
    pub fn validate_create(payload: &SupplierPayload) -> Result<(), AppError> {
        require_non_empty("Name", &payload.name)
    }
}

fn require_non_empty(label: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(())
}
