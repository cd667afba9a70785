//! HTTP server startup logic.
//!
//! Binds the configured address and serves the router over plain HTTP until
//! a shutdown signal arrives. Bind failures (bad address, port already in
//! use) are fatal and propagate to the caller.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host or http.port: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// Start the HTTP server on the configured address.
///
/// This function blocks until the server shuts down. On SIGINT/SIGTERM the
/// listener stops accepting new connections and in-flight requests are
/// allowed to complete before the future resolves.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;

    // bind() with port 0 picks an ephemeral port, so report the real one
    let local_addr = listener.local_addr().map_err(ServerError::Bind)?;
    tracing::info!(addr = %local_addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}
