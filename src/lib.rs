//! Supplier service: REST CRUD over a PostgreSQL `suppliers` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Config, StoreBackend};
pub use error::{AppError, ConfigError};
pub use model::{CreatedSupplier, Supplier, SupplierPayload};
pub use routes::{app, common_routes, supplier_routes};
pub use service::{SupplierService, DEFAULT_READ_TIMEOUT};
pub use state::AppState;
pub use store::{MemorySupplierStore, PgSupplierStore, StoreError, SupplierStore};
