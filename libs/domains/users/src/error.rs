use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::ErrorResponse;
use thiserror::Error;

use crate::models::UserId;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("Path id {path} does not match body id {body}")]
    IdMismatch { path: UserId, body: UserId },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Database connection error: {0}")]
    DatabaseConnection(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// HTTP status the error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            UserError::Unauthorized => StatusCode::UNAUTHORIZED,
            UserError::Forbidden => StatusCode::FORBIDDEN,
            UserError::DatabaseConnection(_) | UserError::Unknown(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            UserError::NotFound(_) => "ELEMENT_NOT_FOUND",
            UserError::IdMismatch { .. } => "ID_MISMATCH",
            UserError::Unauthorized => "UNAUTHORIZED",
            UserError::Forbidden => "FORBIDDEN",
            UserError::DatabaseConnection(_) => "DATABASE_CONNECTION_ERROR",
            UserError::Unknown(_) => "UNKNOWN_ERROR",
        }
    }

    /// Message shown to clients. Never includes internal details.
    pub fn public_message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("Usuario {} no encontrado", id),
            UserError::IdMismatch { path, body } => format!(
                "El id de la ruta ({}) no coincide con el id del cuerpo ({})",
                path, body
            ),
            UserError::Unauthorized => "No esta autorizado".to_string(),
            UserError::Forbidden => "No se cumple con los permisos necesarios".to_string(),
            UserError::DatabaseConnection(_) => {
                "No se ha podido conectar con la base de datos".to_string()
            }
            UserError::Unknown(_) => "Se ha producido un error desconocido".to_string(),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            UserError::DatabaseConnection(msg) => {
                tracing::error!(error_code = self.code(), "Database connection error: {}", msg);
            }
            UserError::Unknown(msg) => {
                tracing::error!(error_code = self.code(), "Unknown error: {}", msg);
            }
            _ => {
                tracing::info!(error_code = self.code(), "{}", self);
            }
        }

        ErrorResponse::new(status, self.code(), self.public_message()).into_response_with(status)
    }
}
