//! HTTP server module.
//!
//! Owns the listening socket lifecycle: bound at startup, drained and closed
//! on SIGTERM/SIGINT. Plain HTTP only; TLS termination belongs to the
//! deployment's ingress or reverse proxy.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
