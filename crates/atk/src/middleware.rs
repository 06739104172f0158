//! Request logging middleware.
//!
//! Emits one line per request with method, URI, status, status class and
//! elapsed time. Installed with [`axum::middleware::from_fn`].

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Coarse outcome of a response status.
pub fn status_class(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "server error"
    } else if status.is_client_error() {
        "client error"
    } else {
        "success"
    }
}

/// Logs every request once the response is ready.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        method = %method,
        uri = %uri,
        status = status.as_u16(),
        class = status_class(status),
        latency_ms = %format_args!("{latency_ms:.3}"),
        "Request completed"
    );

    response
}
