use axum_helpers::JwtConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=3000
        let jwt = JwtConfig::from_env()?; // Required in production

        Ok(Self {
            app: app_info!(),
            server,
            jwt,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_in_development() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None),
                ("PORT", None),
                ("JWT_SECRET", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.address(), "0.0.0.0:3000");
                assert_eq!(config.app.name, "usuarios_api");
            },
        );
    }

    #[test]
    fn test_config_requires_secret_in_production() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("JWT_SECRET", None)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_config_rejects_invalid_port() {
        temp_env::with_vars([("PORT", Some("not-a-port"))], || {
            assert!(Config::from_env().is_err());
        });
    }
}
