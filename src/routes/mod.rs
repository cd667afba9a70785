//! HTTP route handlers.
//!
//! Routes are organized by endpoint, with per-route Cache-Control headers.
//! The greeting page carries a short public cache duration, while the health
//! check is marked no-store so liveness probes always hit the origin.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.
//!
//! Requests to paths outside this table fall through to axum's default 404
//! response; unsupported methods on a known path get a 405.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, CACHE_CONTROL_HOME};
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // Greeting - moderate cache, content is constant
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ),
    );

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
