//! Greeter - a minimal greeting and health-check HTTP service.
//!
//! Exposes two endpoints over plain HTTP: `GET /` returns a fixed greeting
//! and `GET /health` returns a liveness response for orchestration systems.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
