//! HTTP server startup and shutdown.

pub mod server;
pub mod shutdown;
