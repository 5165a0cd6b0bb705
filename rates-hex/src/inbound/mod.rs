//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

pub(crate) mod handlers;
mod rate_limit;
mod server;

pub use server::HttpServer;
