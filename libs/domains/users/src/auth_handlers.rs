use axum::{
    Extension, Json, Router,
    extract::State,
    middleware,
    routing::{get, post},
};
use axum_helpers::{JwtClaims, ValidatedJson, jwt_auth_middleware};

use crate::auth::AuthService;
use crate::error::UserResult;
use crate::models::{LoginRequest, LoginResponse};

/// Create the auth router: `POST /login` and the token-guarded `GET /profile`
pub fn router(service: AuthService) -> Router {
    let protected = Router::new()
        .route("/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(
            service.jwt().clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        .route("/login", post(login))
        .with_state(service)
        .merge(protected)
}

/// Exchange credentials for a bearer token
///
/// POST /login
async fn login(
    State(service): State<AuthService>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let response = service.login(input)?;
    Ok(Json(response))
}

/// Return the verified token payload
///
/// GET /profile
async fn profile(Extension(claims): Extension<JwtClaims>) -> Json<JwtClaims> {
    Json(claims)
}
