use axum::Router;
use axum_helpers::server::{App, create_router, health_router};
use axum_helpers::JwtAuth;
use core_config::AppInfo;
use domain_users::{AuthService, UserRepository, UserService, auth_handlers, handlers};

/// Creates the API routes mounted at the root.
///
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes<R: UserRepository + 'static>(repository: R, jwt: JwtAuth) -> Router {
    Router::new()
        .merge(handlers::router(UserService::new(repository)))
        .merge(auth_handlers::router(AuthService::new(jwt)))
}

/// The complete service: API routes plus `/health`, behind the shared
/// middleware stack.
pub fn app<R: UserRepository + 'static>(repository: R, jwt: JwtAuth, info: AppInfo) -> App {
    create_router(routes(repository, jwt).merge(health_router(info)))
}
