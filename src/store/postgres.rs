//! PostgreSQL backend: parameterized statements against `suppliers(id, name)`.

use super::{StoreError, SupplierStore};
use crate::model::Supplier;
use async_trait::async_trait;
use sqlx::PgPool;

const INSERT: &str = "INSERT INTO suppliers (name) VALUES ($1)";
const EXISTS: &str = "SELECT id FROM suppliers WHERE id = $1";
const SELECT_ONE: &str = "SELECT id, name FROM suppliers WHERE id = $1";
const SELECT_ALL: &str = "SELECT id, name FROM suppliers ORDER BY id";
const UPDATE_NAME: &str = "UPDATE suppliers SET name = $1 WHERE id = $2";
const DELETE: &str = "DELETE FROM suppliers WHERE id = $1";

#[derive(Clone)]
pub struct PgSupplierStore {
    pool: PgPool,
}

impl PgSupplierStore {
    pub fn new(pool: PgPool) -> Self {
        PgSupplierStore { pool }
    }
}

#[async_trait]
impl SupplierStore for PgSupplierStore {
    async fn insert(&self, name: &str) -> Result<(), StoreError> {
        tracing::debug!(sql = %INSERT, name = %name, "query");
        sqlx::query(INSERT).bind(name).execute(&self.pool).await?;
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        tracing::debug!(sql = %EXISTS, id, "query");
        let row: Option<(i32,)> = sqlx::query_as(EXISTS)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn fetch_one(&self, id: i32) -> Result<Option<Supplier>, StoreError> {
        tracing::debug!(sql = %SELECT_ONE, id, "query");
        let row = sqlx::query_as::<_, Supplier>(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_all(&self) -> Result<Vec<Supplier>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Supplier>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update_name(&self, id: i32, name: &str) -> Result<u64, StoreError> {
        tracing::debug!(sql = %UPDATE_NAME, id, name = %name, "query");
        let done = sqlx::query(UPDATE_NAME)
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let done = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
