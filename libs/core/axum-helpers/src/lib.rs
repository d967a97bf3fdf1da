//! # Axum Helpers
//!
//! Utilities, middleware and helpers shared by the Axum services in this
//! workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT signing/verification and the bearer-token middleware
//! - **[`server`]**: Router setup, health endpoint, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: Structured error responses
//! - **[`extractors`]**: Custom extractors (integer id path, validated JSON/query)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let app = create_router(api_routes.merge(health_router(app_info!())));
//!
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{JwtAuth, JwtClaims, JwtConfig, SESSION_TOKEN_TTL, jwt_auth_middleware};

// Re-export server types
pub use server::{App, HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::{AppError, ErrorResponse, WireFields};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};
