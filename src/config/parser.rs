//! Configuration file parsing (HOCON format).

use std::path::Path;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Load configuration from a HOCON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    hocon_rs::Config::load(path, None).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: std::io::Error::new(std::io::ErrorKind::Other, e.to_string()),
    })
}

/// Load configuration from a HOCON string.
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    hocon_rs::Config::parse_str(content, None).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config = load_config_str(
            r#"
            host = "0.0.0.0"
            tcp_port = 27130
            db_path = "test.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.tcp_port, 27130);
        assert_eq!(config.db_path, "test.db");
        // Unspecified keys fall back to their defaults.
        assert_eq!(config.http_port, 80);
        assert_eq!(config.policy_port, 27132);
    }

    #[test]
    fn parses_nested_debug_block() {
        let config = load_config_str(
            r#"
            db_path = "test.db"
            debug {
                tcp = false
                console_hex_limit = 64
            }
            "#,
        )
        .unwrap();

        assert!(!config.debug.tcp);
        assert_eq!(config.debug.console_hex_limit, 64);
        // Untouched debug keys keep their defaults.
        assert!(config.debug.http);
    }
}
