use super::shutdown::shutdown_signal;
use crate::errors::handlers::{method_not_allowed, not_found, panic_response};
use crate::http::security::security_headers;
use axum::{
    Router, ServiceExt,
    extract::{DefaultBodyLimit, Request},
    middleware,
};
use core_config::server::ServerConfig;
use std::io;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Largest accepted request body (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Fully assembled service: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::{create_app, create_router};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = create_router(Router::new());
///     create_app(app, &ServerConfig::default()).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(app: App, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Wraps the API routes with the shared middleware stack.
///
/// This function sets up:
/// - API routes mounted at the root
/// - JSON 404 and 405 fallbacks
/// - Request body limit ([`MAX_BODY_BYTES`])
/// - Panic recovery into a generic JSON 500
/// - Security headers
/// - Request tracing
/// - Trailing slash trimming (`/usuarios/` routes like `/usuarios`)
///
/// Domain routers apply their own state before being passed in.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum_helpers::server::create_router;
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router(api_routes);
/// ```
pub fn create_router(apis: Router) -> App {
    let router = apis
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(security_headers))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    // Rewrites the path before the router sees it
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
