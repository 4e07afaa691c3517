//! Persistence gateway for the `suppliers` table.
//!
//! Callers see `Supplier` values and `StoreError`; SQL stays inside the backends.

mod memory;
mod postgres;

pub use memory::MemorySupplierStore;
pub use postgres::PgSupplierStore;

use crate::model::Supplier;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SupplierStore: Send + Sync {
    /// Append a row; the backend assigns the id.
    async fn insert(&self, name: &str) -> Result<(), StoreError>;

    /// Existence probe. A missing row is `Ok(false)`, not an error.
    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    async fn fetch_one(&self, id: i32) -> Result<Option<Supplier>, StoreError>;

    /// All rows ordered by id. A failure on any row fails the whole listing.
    async fn fetch_all(&self) -> Result<Vec<Supplier>, StoreError>;

    /// Unconditional update by id. Returns rows affected.
    async fn update_name(&self, id: i32, name: &str) -> Result<u64, StoreError>;

    /// Unconditional delete by id. Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
