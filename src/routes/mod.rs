//! HTTP route handlers and router assembly.
//!
//! Routes are grouped by cache behavior: probe endpoints (`/health`, `/ready`)
//! carry `Cache-Control: no-store` so intermediaries never serve a stale
//! liveness answer, while the info endpoints are left to framework defaults.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.
//! A catch-panic layer wraps everything so any handler failure surfaces as the
//! generic 500 JSON contract instead of a dropped connection.

pub mod health;
pub mod home;
pub mod info;

use axum::{middleware, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::error::panic_response;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control value for probe endpoints: always fresh.
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Current time as an ISO-8601 UTC string with millisecond precision.
///
/// Matches the `YYYY-MM-DDTHH:MM:SS.sssZ` shape orchestration tooling expects
/// from health endpoints.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creates the Axum router with all routes, cache headers, and middleware.
pub fn create_router(state: AppState) -> Router {
    // Probes - never cached, always answered fresh
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    // Info endpoints
    let info_routes = Router::new()
        .route("/", get(home::index))
        .route("/api/info", get(info::api_info));

    Router::new()
        .merge(probe_routes)
        .merge(info_routes)
        .with_state(state)
        // Panic boundary - maps any handler panic to the generic 500 body
        .layer(CatchPanicLayer::custom(panic_response))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::{AppConfig, HttpServerConfig, DEFAULT_ENVIRONMENT, DEFAULT_PORT};

    fn test_state() -> AppState {
        AppState::new(AppConfig {
            http: HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port: DEFAULT_PORT,
            },
            environment: DEFAULT_ENVIRONMENT.to_string(),
        })
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ready_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn probe_endpoints_are_not_cacheable() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_PROBE);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn timestamps_are_iso8601_utc() {
        let ts = now_iso8601();
        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        assert_eq!(parsed.timezone().local_minus_utc(), 0);
        assert!(ts.ends_with('Z'));
    }
}
