//! In-process backend. Ids start at 1 and are never reused.

use super::{StoreError, SupplierStore};
use crate::model::Supplier;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, String>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemorySupplierStore {
    table: RwLock<Table>,
    failing: AtomicBool,
}

impl MemorySupplierStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every operation fails with `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is in failing mode".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SupplierStore for MemorySupplierStore {
    async fn insert(&self, name: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut table = self.table.write().await;
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("id sequence exhausted".into()))?;
        let id = table.last_id;
        table.rows.insert(id, name.to_string());
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn fetch_one(&self, id: i32) -> Result<Option<Supplier>, StoreError> {
        self.check()?;
        let table = self.table.read().await;
        Ok(table.rows.get(&id).map(|name| Supplier {
            id,
            name: name.clone(),
        }))
    }

    async fn fetch_all(&self) -> Result<Vec<Supplier>, StoreError> {
        self.check()?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .map(|(id, name)| Supplier {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn update_name(&self, id: i32, name: &str) -> Result<u64, StoreError> {
        self.check()?;
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(current) => {
                *current = name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.table.write().await.rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }
}
