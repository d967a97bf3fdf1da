//! Configuration types for axum-helpers.
//!
//! `JwtConfig` implements the `FromEnv` trait from `core_config`, following
//! the same pattern as `ServerConfig`.

use core_config::{ConfigError, Environment, FromEnv};

/// Minimum accepted length of the signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Signing secret used outside production when `JWT_SECRET` is unset.
const DEVELOPMENT_SECRET: &str = "development-only-secret-change-me-0000";

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` - at least 32 characters. Required when `APP_ENV=production`;
///   development falls back to a fixed, publicly known secret.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// let config = JwtConfig::from_env()?;
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self { secret }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if Environment::from_env().is_development() => {
                tracing::warn!("JWT_SECRET not set, using the development signing secret");
                DEVELOPMENT_SECRET.to_string()
            }
            Err(_) => return Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string())),
        };

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        Ok(Self { secret })
    }
}
