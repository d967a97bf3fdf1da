use axum::{http::StatusCode, response::Response};
use std::any::Any;

use super::{ErrorResponse, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        messages::CODE_NOT_FOUND,
        messages::NOT_FOUND_RESOURCE,
    )
    .into_response_with(StatusCode::NOT_FOUND)
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        messages::CODE_METHOD_NOT_ALLOWED,
        messages::METHOD_NOT_ALLOWED,
    )
    .into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer`.
///
/// The panic payload is logged and the client only sees the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(error_code = messages::CODE_INTERNAL, "Handler panicked: {}", detail);

    ErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        messages::CODE_INTERNAL,
        messages::INTERNAL_ERROR,
    )
    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
