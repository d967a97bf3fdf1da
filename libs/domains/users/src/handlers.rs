use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{IdPath, ValidatedJson, ValidatedQuery};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::{CreateUser, ReplaceUser, User, UserFilter};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route(
            "/usuarios/{id_usuario}",
            get(get_user).put(replace_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// List users with an optional name filter
///
/// GET /usuarios?nombre=ju
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedQuery(filter): ValidatedQuery<UserFilter>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users(filter).await?;
    Ok(Json(users))
}

/// Create a new user
///
/// POST /usuarios
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /usuarios/:id_usuario
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Update a user's name
///
/// PUT /usuarios/:id_usuario
async fn replace_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ReplaceUser>,
) -> UserResult<impl IntoResponse> {
    service.replace_user(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
///
/// DELETE /usuarios/:id_usuario
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
