use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "error"
    } else {
        "trace"
    }
}

/// `RUST_LOG` when it parses, the environment default otherwise.
fn log_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)))
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, module
///   targets hidden.
/// - **Development** (default): pretty output without file locations.
///
/// Both modes carry `tracing_error::ErrorLayer` so `color-eyre` reports can
/// show span traces. Later calls leave the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let fmt = tracing_subscriber::fmt::layer().with_target(false);
    let output = if environment.is_production() {
        fmt.json().flatten_event(true).boxed()
    } else {
        fmt.with_file(false).with_line_number(false).pretty().boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(log_filter(environment))
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .is_ok();

    if installed {
        info!(?environment, "Tracing initialized");
    } else {
        debug!("Subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_directive_per_environment() {
        assert_eq!(default_directive(&Environment::Production), "error");
        assert_eq!(default_directive(&Environment::Development), "trace");
    }

    #[test]
    fn test_filter_falls_back_to_environment_default() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = log_filter(&Environment::Production);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
        });
    }

    #[test]
    fn test_rust_log_overrides_default() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            let filter = log_filter(&Environment::Development);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        });
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(&Environment::Production);
        init_tracing(&Environment::Development);
    }
}
