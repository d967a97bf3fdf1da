use axum_helpers::server::create_app;
use axum_helpers::JwtAuth;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::InMemoryUserRepository;
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let jwt = JwtAuth::new(&config.jwt);
    let repository = InMemoryUserRepository::seeded();

    // - /usuarios: user CRUD
    // - /login, /profile: bearer token flow
    // - /health: liveness check with app name/version
    let app = api::app(repository, jwt, config.app);

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Usuarios API shutdown complete");
    Ok(())
}
