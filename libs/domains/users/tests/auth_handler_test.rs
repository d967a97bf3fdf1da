//! Handler tests for the login flow and the token-guarded profile route

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum_helpers::{JwtAuth, JwtClaims, JwtConfig};
use domain_users::*;
use domain_users::auth::PLACEHOLDER_PASSWORD;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const SECRET: &str = "handler-test-secret-at-least-32-chars";

fn app() -> Router {
    let jwt = JwtAuth::new(&JwtConfig::new(SECRET));
    auth_handlers::router(AuthService::new(jwt))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn login_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn profile_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/profile");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_login_with_wrong_password_returns_401() {
    let response = app()
        .oneshot(login_request(json!({"user": "ana", "password": "nope"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_without_password_returns_401() {
    let response = app()
        .oneshot(login_request(json!({"user": "ana"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_returns_token_and_profile_echoes_claims() {
    let app = app();

    let response = app
        .clone()
        .oneshot(login_request(
            json!({"user": "ana", "password": PLACEHOLDER_PASSWORD}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let login: LoginResponse = json_body(response.into_body()).await;
    assert!(!login.token.is_empty());

    let response = app
        .oneshot(profile_request(Some(&format!("Bearer {}", login.token))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let claims: JwtClaims = json_body(response.into_body()).await;
    assert_eq!(claims.user, "ana");
    assert_eq!(claims.roles, ["user", "admin"]);
}

#[tokio::test]
async fn test_profile_without_token_returns_401() {
    let response = app().oneshot(profile_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_garbage_token_returns_401() {
    let response = app()
        .oneshot(profile_request(Some("Bearer not.a.jwt")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_rejects_token_signed_with_other_secret() {
    let other = JwtAuth::new(&JwtConfig::new("another-secret-that-is-32-chars-long"));
    let token = other
        .create_token("ana", &["user".to_string()])
        .unwrap();

    let response = app()
        .oneshot(profile_request(Some(&format!("Bearer {token}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
