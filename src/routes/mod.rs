//! Routers and the assembled application.

mod common;
mod supplier;

pub use common::common_routes;
pub use supplier::supplier_routes;

use crate::middleware::log_requests;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};

/// Full application: common and supplier routes, with request logging and a
/// body size limit applied to every route. An oversized body surfaces as a
/// `JsonBody` rejection, so it gets the same JSON 400 as any unreadable body.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(supplier_routes(state))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(log_requests))
}
