//! Query string extractor with automatic validation.

use crate::errors::{AppError, WireFields};
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string counterpart of [`ValidatedJson`](super::ValidatedJson).
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + WireFields,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::validation::<T>(e).into_response())?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Filter {
        #[validate(length(min = 2))]
        name: Option<String>,
    }

    impl WireFields for Filter {}

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|ValidatedQuery(filter): ValidatedQuery<Filter>| async move {
                filter.name.unwrap_or_default()
            }),
        )
    }

    async fn status_for(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_absent_optional_filter_passes() {
        assert_eq!(status_for("/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_valid_filter_passes() {
        assert_eq!(status_for("/?name=ju").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_short_filter_rejected() {
        assert_eq!(status_for("/?name=j").await, StatusCode::BAD_REQUEST);
    }
}
