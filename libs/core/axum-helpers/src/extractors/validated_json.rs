//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, WireFields};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body and then runs the `validator` crate's `Validate`
/// checks. Malformed bodies and failed checks both produce a structured
/// 400 `ErrorResponse`; validation failures carry per-field `details`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::{WireFields, extractors::ValidatedJson};
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 2))]
///     nombre: String,
/// }
///
/// impl WireFields for CreateUser {}
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.nombre)
/// }
///
/// let app = Router::new().route("/usuarios", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + WireFields,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::validation::<T>(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
