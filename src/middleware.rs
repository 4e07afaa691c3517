//! Request logging applied router-wide.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs before and after the inner handler, whatever the outcome.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    tracing::info!(%method, %path, "request started");

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request finished"
    );
    response
}
