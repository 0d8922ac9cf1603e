//! Environment variable overrides for configuration.
//!
//! Most values are meant to live in the checked-in HOCON file; this module
//! covers the handful of things an operator expects to override without
//! editing it (config file location, database path for throwaway test runs).

use std::env;

use crate::config::types::Config;

/// Apply environment variable overrides to a config.
pub fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(db_path) = env::var("RCC_DB_PATH") {
        if !db_path.is_empty() {
            config.db_path = db_path;
        }
    }

    if let Ok(host) = env::var("RCC_HOST") {
        if !host.is_empty() {
            config.host = host;
        }
    }

    config
}

/// Get the config file path from environment or use default.
///
/// Checks the `RCC_CONFIG` environment variable, otherwise returns
/// `rcc-server.conf`.
pub fn get_config_path() -> String {
    env::var("RCC_CONFIG").unwrap_or_else(|_| "rcc-server.conf".to_string())
}
