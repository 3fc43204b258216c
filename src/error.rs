//! Application errors and the fixed 500 response contract.
//!
//! Every unhandled failure during request processing, whether a handler
//! returning `AppError` or an outright panic caught by the catch-panic layer,
//! is logged and surfaced to the client as the same generic JSON body.

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use http_body_util::Full;
use serde::Serialize;

/// Fixed error string returned in every 500 body.
pub const GENERIC_ERROR: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body for the generic 500 response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unhandled error during request handling");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: GENERIC_ERROR,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Map a handler panic to the generic 500 contract.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom` so a panicking
/// handler produces the same JSON body as a handler returning `AppError`.
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> http::Response<Full<Bytes>> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(message = %message, "Request handler panicked");

    let body = serde_json::json!({
        "error": GENERIC_ERROR,
        "message": message,
    });

    http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body.to_string()))
        .expect("static response parts are valid")
}
