pub mod handlers;
pub mod messages;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error leaving the service has this shape:
/// - `code`: machine-readable error identifier (e.g. `ELEMENT_NOT_FOUND`)
/// - `error`: error class derived from the HTTP status (e.g. `NotFound`)
/// - `message`: human-readable message, safe to show to clients
/// - `details`: optional structured details (e.g. validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": "ELEMENT_NOT_FOUND",
///   "error": "NotFound",
///   "message": "Usuario 9999 no encontrado"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            error: error_class(status).to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the body with its status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Error class reported in the `error` field.
fn error_class(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BadRequest",
        StatusCode::UNAUTHORIZED => "Unauthorized",
        StatusCode::FORBIDDEN => "Forbidden",
        StatusCode::NOT_FOUND => "NotFound",
        StatusCode::METHOD_NOT_ALLOWED => "MethodNotAllowed",
        StatusCode::PAYLOAD_TOO_LARGE => "PayloadTooLarge",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UnsupportedMediaType",
        StatusCode::UNPROCESSABLE_ENTITY => "UnprocessableEntity",
        s if s.is_server_error() => "InternalServerError",
        _ => "Error",
    }
}

/// Field names as clients spell them.
///
/// `validator` reports the Rust field name, so types whose serde names
/// differ map them back here. The default keeps the Rust name.
pub trait WireFields {
    fn wire_field(field: &str) -> &str {
        field
    }
}

/// Flatten validator errors into `{field: [{code, message, params}]}`,
/// keyed by the wire name of each field.
pub fn validation_details(
    errors: &ValidationErrors,
    wire_field: fn(&str) -> &str,
) -> serde_json::Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let error_messages: Vec<serde_json::Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (wire_field(field).to_string(), serde_json::json!(error_messages))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(details)
}

/// Application error type that can be converted to HTTP responses.
///
/// Covers failures raised by the shared plumbing (extractors, auth
/// middleware, fallbacks). Domain crates define their own error enums and
/// render them through [`ErrorResponse`] as well.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {errors}")]
    ValidationError {
        errors: ValidationErrors,
        details: serde_json::Value,
    },

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Validation failure for `T`, with details under the wire field names.
    pub fn validation<T: WireFields>(errors: ValidationErrors) -> Self {
        let details = validation_details(&errors, T::wire_field);
        AppError::ValidationError { errors, details }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = messages::CODE_JSON_EXTRACTION, "JSON extraction error: {:?}", e);
                // Shape mismatches (422 from axum) are reported as 400
                let status = match &e {
                    JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                    _ => e.status(),
                };
                (
                    status,
                    ErrorResponse::new(status, messages::CODE_JSON_EXTRACTION, e.body_text()),
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error_code = messages::CODE_QUERY_EXTRACTION, "Query extraction error: {:?}", e);
                let status = e.status();
                (
                    status,
                    ErrorResponse::new(status, messages::CODE_QUERY_EXTRACTION, e.body_text()),
                )
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!(error_code = messages::CODE_PATH_EXTRACTION, "Path extraction error: {:?}", e);
                let status = e.status();
                (
                    status,
                    ErrorResponse::new(status, messages::CODE_PATH_EXTRACTION, e.body_text()),
                )
            }
            AppError::ValidationError { errors, details } => {
                tracing::info!(error_code = messages::CODE_VALIDATION, "Validation error: {:?}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        StatusCode::BAD_REQUEST,
                        messages::CODE_VALIDATION,
                        messages::VALIDATION_FAILED,
                    )
                    .with_details(details),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(StatusCode::BAD_REQUEST, messages::CODE_BAD_REQUEST, msg),
                )
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new(StatusCode::UNAUTHORIZED, messages::CODE_UNAUTHORIZED, msg),
                )
            }
        };

        body.into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct Renamed {
        #[validate(length(min = 2))]
        name: String,
    }

    impl WireFields for Renamed {
        fn wire_field(field: &str) -> &str {
            match field {
                "name" => "nombre",
                other => other,
            }
        }
    }

    #[tokio::test]
    async fn test_validation_details_use_wire_names() {
        let errors = Renamed {
            name: "A".to_string(),
        }
        .validate()
        .unwrap_err();

        let response = AppError::validation::<Renamed>(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.code, messages::CODE_VALIDATION);
        let details = body.details.unwrap();
        assert!(details.get("nombre").is_some());
        assert!(details.get("name").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Invalid id 'abc'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body.code, messages::CODE_BAD_REQUEST);
        assert_eq!(body.error, "BadRequest");
        assert_eq!(body.message, "Invalid id 'abc'");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let response = AppError::Unauthorized("no token".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(response).await.error, "Unauthorized");
    }

    #[test]
    fn test_error_class_for_server_errors() {
        assert_eq!(error_class(StatusCode::BAD_GATEWAY), "InternalServerError");
        assert_eq!(error_class(StatusCode::IM_A_TEAPOT), "Error");
    }
}
