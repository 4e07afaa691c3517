//! Supplier CRUD routes.

use crate::handlers::supplier::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn supplier_routes(state: AppState) -> Router {
    Router::new()
        .route("/supplier", get(list).post(create))
        .route("/supplier/", get(list).post(create))
        .route("/supplier/:id", get(read).patch(update).delete(delete_handler))
        .with_state(state)
}
