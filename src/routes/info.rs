//! Static API descriptor endpoint.
//!
//! `/api/info` returns a fixed document describing the application and the
//! platform it runs on. Everything here is constant apart from the platform
//! fields, which are resolved at compile time.

use axum::Json;
use serde::Serialize;

/// Application display name.
pub const APPLICATION_NAME: &str = "beacon";

/// One-line application description.
pub const APPLICATION_DESCRIPTION: &str =
    "A minimal HTTP service exposing health, readiness, and service info endpoints";

/// Fixed feature list reported by `/api/info`, in order.
pub const FEATURES: [&str; 6] = [
    "Liveness and readiness probes",
    "Graceful shutdown on SIGTERM",
    "Structured logging with request IDs",
    "Environment-based configuration",
    "Generic JSON error responses",
    "Container-ready deployment",
];

/// Body of the `GET /api/info` response.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub application: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 6],
    pub platform: PlatformInfo,
}

/// Build platform details.
#[derive(Debug, Serialize)]
pub struct PlatformInfo {
    /// Runtime identifier with crate version.
    pub runtime: String,
    /// Target operating system, e.g. "linux".
    pub os: &'static str,
    /// Target architecture, e.g. "x86_64".
    pub architecture: &'static str,
}

/// API info handler.
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        application: APPLICATION_NAME,
        description: APPLICATION_DESCRIPTION,
        features: FEATURES,
        platform: PlatformInfo {
            runtime: format!("{}/{}", APPLICATION_NAME, env!("CARGO_PKG_VERSION")),
            os: std::env::consts::OS,
            architecture: std::env::consts::ARCH,
        },
    })
}
