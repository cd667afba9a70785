//! Request ID middleware for correlating logs with requests.
//!
//! Assigns a UUID v4 to each incoming request and wraps its entire lifecycle
//! in a tracing span carrying the request_id, method, and path. Any log
//! emitted while handling the request can be correlated through that span.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Request ID stored in request extensions for handlers that want it.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns a request ID and opens a per-request span.
///
/// Keep this as the outermost layer so the span covers every other
/// middleware and the handler itself.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    request.extensions_mut().insert(RequestId(request_id));

    let start = Instant::now();
    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let span = tracing::Span::current();
        span.record("status", response.status().as_u16());
        span.record("duration_ms", duration_ms);
        tracing::info!("Request completed");

        response
    }
    .instrument(span)
    .await
}
