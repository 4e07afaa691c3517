//! Supplier business rules: validation, existence-first mutation, bounded reads.

use crate::error::AppError;
use crate::model::{parse_supplier_id, CreatedSupplier, Supplier, SupplierPayload};
use crate::service::RequestValidator;
use crate::store::{StoreError, SupplierStore};
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a get-by-id query.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

const MISSING: &str = "Not found";
const SUPPLIER_MISSING: &str = "Supplier not found";

#[derive(Clone)]
pub struct SupplierService {
    store: Arc<dyn SupplierStore>,
    read_timeout: Duration,
}

impl SupplierService {
    pub fn new(store: Arc<dyn SupplierStore>, read_timeout: Duration) -> Self {
        SupplierService { store, read_timeout }
    }

    pub fn store(&self) -> &Arc<dyn SupplierStore> {
        &self.store
    }

    /// Insert a supplier. The response echoes the submitted name, not the new id.
    pub async fn create(&self, payload: SupplierPayload) -> Result<CreatedSupplier, AppError> {
        RequestValidator::validate_create(&payload)?;
        self.store
            .insert(&payload.name)
            .await
            .map_err(AppError::persistence("Cannot create supplier"))?;
        tracing::info!(name = %payload.name, "supplier created");
        Ok(CreatedSupplier { name: payload.name })
    }

    pub async fn list(&self) -> Result<Vec<Supplier>, AppError> {
        self.store
            .fetch_all()
            .await
            .map_err(AppError::persistence("Cannot retrieve suppliers"))
    }

    pub async fn get(&self, raw_id: &str) -> Result<Supplier, AppError> {
        let Some(id) = parse_supplier_id(raw_id)? else {
            return Err(AppError::NotFound(SUPPLIER_MISSING.into()));
        };
        let fetched = tokio::time::timeout(self.read_timeout, self.store.fetch_one(id))
            .await
            .unwrap_or(Err(StoreError::Timeout(self.read_timeout)))
            .map_err(AppError::persistence("Internal server error"))?;
        fetched.ok_or_else(|| AppError::NotFound(SUPPLIER_MISSING.into()))
    }

    /// Full-field overwrite of the name. The existence probe and the write are
    /// not atomic; a row deleted in between is reported as not found.
    pub async fn update(&self, raw_id: &str, payload: SupplierPayload) -> Result<(), AppError> {
        let id = self.require_existing(raw_id).await?;
        let affected = self
            .store
            .update_name(id, &payload.name)
            .await
            .map_err(AppError::persistence("Cannot update supplier"))?;
        if affected == 0 {
            tracing::warn!(id, "supplier vanished before update");
            return Err(AppError::NotFound(MISSING.into()));
        }
        tracing::info!(id, name = %payload.name, "supplier updated");
        Ok(())
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = self.require_existing(raw_id).await?;
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(AppError::persistence("Cannot delete supplier"))?;
        if affected == 0 {
            tracing::warn!(id, "supplier vanished before delete");
            return Err(AppError::NotFound(MISSING.into()));
        }
        tracing::info!(id, "supplier deleted");
        Ok(())
    }

    async fn require_existing(&self, raw_id: &str) -> Result<i32, AppError> {
        let Some(id) = parse_supplier_id(raw_id)? else {
            return Err(AppError::NotFound(MISSING.into()));
        };
        let found = self
            .store
            .exists(id)
            .await
            .map_err(AppError::persistence("Cannot get supplier"))?;
        if !found {
            return Err(AppError::NotFound(MISSING.into()));
        }
        Ok(id)
    }
}
