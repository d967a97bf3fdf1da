//! Placeholder login flow.
//!
//! Credentials are checked against a fixed password and the issued token
//! carries a fixed role list. This only demonstrates the shape of a bearer
//! token flow; it is not an authentication policy.

use axum_helpers::JwtAuth;

use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, LoginResponse};

/// The only password `login` accepts.
pub const PLACEHOLDER_PASSWORD: &str = "contraseña";

/// User claim when the login request names nobody.
pub const DEFAULT_LOGIN_USER: &str = "invitado";

/// Roles embedded in every issued token.
pub const SESSION_ROLES: [&str; 2] = ["user", "admin"];

#[derive(Clone)]
pub struct AuthService {
    jwt: JwtAuth,
}

impl AuthService {
    pub fn new(jwt: JwtAuth) -> Self {
        Self { jwt }
    }

    /// Token verifier for guarding routes
    pub fn jwt(&self) -> &JwtAuth {
        &self.jwt
    }

    /// Check the password and issue a one-hour session token
    pub fn login(&self, input: LoginRequest) -> UserResult<LoginResponse> {
        if input.password.as_deref() != Some(PLACEHOLDER_PASSWORD) {
            return Err(UserError::Unauthorized);
        }

        let user = input
            .user
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOGIN_USER.to_string());
        let roles: Vec<String> = SESSION_ROLES.iter().map(|r| r.to_string()).collect();

        let token = self.jwt.create_token(&user, &roles).map_err(|e| {
            tracing::error!("Failed to create session token: {:?}", e);
            UserError::Unknown("Failed to create token".to_string())
        })?;

        tracing::info!(user = %user, "Issued session token");
        Ok(LoginResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::{JwtConfig, SESSION_TOKEN_TTL};

    fn service() -> AuthService {
        AuthService::new(JwtAuth::new(&JwtConfig::new(
            "this-is-a-valid-secret-with-32-chars!",
        )))
    }

    fn request(user: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            user: user.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let result = service().login(request(Some("ana"), Some("wrong")));
        assert!(matches!(result, Err(UserError::Unauthorized)));
    }

    #[test]
    fn test_missing_password_is_unauthorized() {
        let result = service().login(request(Some("ana"), None));
        assert!(matches!(result, Err(UserError::Unauthorized)));
    }

    #[test]
    fn test_login_issues_token_with_user_and_roles() {
        let service = service();
        let response = service
            .login(request(Some("ana"), Some(PLACEHOLDER_PASSWORD)))
            .unwrap();
        assert!(!response.token.is_empty());

        let claims = service.jwt().verify_token(&response.token).unwrap();
        assert_eq!(claims.user, "ana");
        assert_eq!(claims.roles, ["user", "admin"]);
        assert_eq!(claims.exp - claims.iat, SESSION_TOKEN_TTL);
    }

    #[test]
    fn test_login_without_user_uses_default() {
        let service = service();
        let response = service.login(request(None, Some(PLACEHOLDER_PASSWORD))).unwrap();
        let claims = service.jwt().verify_token(&response.token).unwrap();
        assert_eq!(claims.user, DEFAULT_LOGIN_USER);
    }
}
