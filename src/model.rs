//! Supplier record and request/response bodies.

use crate::error::AppError;
use crate::extractors::INVALID_ID;
use serde::{Deserialize, Serialize};

/// One row of the `suppliers` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
}

/// Body of create and update. A missing `name` reads as empty: update overwrites
/// the whole record with whatever the body carries.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SupplierPayload {
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreatedSupplier {
    pub name: String,
}

/// Parse the `{id}` path segment. Non-integers are rejected; integers that do not
/// fit the `integer` column give `None` since no row can carry them.
pub fn parse_supplier_id(raw: &str) -> Result<Option<i32>, AppError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(INVALID_ID.into()))?;
    Ok(i32::try_from(n).ok())
}
