//! Supplier handlers: create, list, read, update, delete.
//! Each parses its input, calls `SupplierService` and maps the result to a status and JSON body.

use crate::error::AppError;
use crate::extractors::{JsonBody, SupplierIdPath};
use crate::model::SupplierPayload;
use crate::response::{confirmation, ok};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// A JSON `null` body reads as a payload with no fields.
type PayloadBody = JsonBody<Option<SupplierPayload>>;

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): PayloadBody,
) -> Result<impl IntoResponse, AppError> {
    let created = state.suppliers.create(body.unwrap_or_default()).await?;
    Ok(ok(created))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.suppliers.list().await?;
    Ok(ok(rows))
}

pub async fn read(
    State(state): State<AppState>,
    SupplierIdPath(id): SupplierIdPath,
) -> Result<impl IntoResponse, AppError> {
    let supplier = state.suppliers.get(&id).await?;
    Ok(ok(supplier))
}

/// Body is parsed before the existence probe, so a malformed body wins over a missing id.
pub async fn update(
    State(state): State<AppState>,
    SupplierIdPath(id): SupplierIdPath,
    JsonBody(body): PayloadBody,
) -> Result<impl IntoResponse, AppError> {
    state.suppliers.update(&id, body.unwrap_or_default()).await?;
    Ok(confirmation("Updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    SupplierIdPath(id): SupplierIdPath,
) -> Result<impl IntoResponse, AppError> {
    state.suppliers.delete(&id).await?;
    Ok(confirmation("Deleted"))
}
