//! Liveness and readiness probes for container orchestration.
//!
//! `/health` is a liveness probe: it answers whenever the process can respond
//! to HTTP, and reports how long it has been up. `/ready` is a readiness
//! probe: this service has no dependencies to warm up, so it is ready as soon
//! as it is serving. Used by Kubernetes, ECS, systemd, and load balancers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::now_iso8601;
use crate::state::AppState;

/// Body of the `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since process start, fractional.
    pub uptime: f64,
}

/// Body of the `/ready` response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: now_iso8601(),
        uptime: state.uptime_secs(),
    })
}

/// Readiness check handler.
pub async fn ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        timestamp: now_iso8601(),
    })
}
