//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.host.is_empty() {
        errors.push("host must not be empty".to_string());
    }

    if config.db_path.is_empty() {
        errors.push("db_path must not be empty".to_string());
    }

    let ports = [
        ("http_port", config.http_port),
        ("tcp_port", config.tcp_port),
        ("policy_port", config.policy_port),
    ];
    for (name, port) in ports {
        if port == 0 {
            errors.push(format!("{} must not be 0", name));
        }
    }

    if config.http_port == config.tcp_port {
        errors.push("http_port and tcp_port must differ".to_string());
    }
    if config.tcp_port == config.policy_port {
        errors.push("tcp_port and policy_port must differ".to_string());
    }
    if config.http_port == config.policy_port {
        errors.push("http_port and policy_port must differ".to_string());
    }

    if config.debug.console_hex_limit == 0 {
        errors.push("debug.console_hex_limit must be greater than 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_host_fails() {
        let mut config = Config::default();
        config.host = String::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("host"));
    }

    #[test]
    fn test_colliding_ports_fail() {
        let mut config = Config::default();
        config.tcp_port = config.http_port;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must differ"));
    }

    #[test]
    fn test_zero_port_fails() {
        let mut config = Config::default();
        config.policy_port = 0;

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("policy_port"));
    }
}
