//! Supplier server: reads config from env/.env, connects the store, serves the API.

use std::sync::Arc;
use supplier_service::{app, AppState, Config, MemorySupplierStore, PgSupplierStore, StoreBackend, SupplierService, SupplierStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("supplier_service=info,supplier_server=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn SupplierStore> = match config.backend {
        StoreBackend::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            let store = PgSupplierStore::new(pool);
            store.ping().await?;
            tracing::info!("connected to database");
            Arc::new(store)
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemorySupplierStore::new())
        }
    };

    let state = AppState::new(SupplierService::new(store, config.read_timeout));
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
