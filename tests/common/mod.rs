#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use supplier_service::{app, AppState, MemorySupplierStore, SupplierService, SupplierStore, DEFAULT_READ_TIMEOUT};
use tower::ServiceExt as _;

pub const BODY_LIMIT: usize = 64 * 1024;

pub fn router_with(store: Arc<dyn SupplierStore>, read_timeout: Duration) -> Router {
    app(AppState::new(SupplierService::new(store, read_timeout)), BODY_LIMIT)
}

pub fn memory_router() -> (Arc<MemorySupplierStore>, Router) {
    let store = Arc::new(MemorySupplierStore::new());
    let router = router_with(store.clone(), DEFAULT_READ_TIMEOUT);
    (store, router)
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}
