//! Root endpoint reporting basic service identity.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::now_iso8601;
use crate::state::AppState;

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Hello from beacon! The service is up and serving.";

/// Body of the `GET /` response.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    /// Crate version, e.g. "1.1.0".
    pub version: &'static str,
    /// Deployment environment name, from NODE_ENV.
    pub environment: String,
    pub hostname: String,
    pub timestamp: String,
}

/// Root endpoint handler.
pub async fn index(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: WELCOME_MESSAGE,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        hostname: state.hostname.to_string(),
        timestamp: now_iso8601(),
    })
}
