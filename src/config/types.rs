//! Configuration type definitions.

use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub http_port: u16,

    #[serde(default = "default_tcp_port")]
    pub tcp_port: u16,

    #[serde(default = "default_policy_port")]
    pub policy_port: u16,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default)]
    pub debug: DebugConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
            tcp_port: default_tcp_port(),
            policy_port: default_policy_port(),
            db_path: default_db_path(),
            debug: DebugConfig::default(),
        }
    }
}

/// Per-category debug logging configuration, mirroring the server's
/// `debug_config.py` module.
#[derive(Debug, Clone, Deserialize)]
pub struct DebugConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub tcp: bool,

    #[serde(default = "default_true")]
    pub http: bool,

    #[serde(default = "default_true")]
    pub binary: bool,

    #[serde(default = "default_true")]
    pub protocol_analysis: bool,

    #[serde(default = "default_log_directory")]
    pub log_directory: String,

    #[serde(default = "default_max_binary_log_size")]
    pub max_binary_log_size: usize,

    #[serde(default = "default_true")]
    pub console_verbose: bool,

    #[serde(default = "default_console_hex_limit")]
    pub console_hex_limit: usize,

    #[serde(default)]
    pub auto_rotate: bool,

    #[serde(default = "default_rotate_after_connections")]
    pub rotate_after_connections: u32,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tcp: true,
            http: true,
            binary: true,
            protocol_analysis: true,
            log_directory: default_log_directory(),
            max_binary_log_size: default_max_binary_log_size(),
            console_verbose: true,
            console_hex_limit: default_console_hex_limit(),
            auto_rotate: false,
            rotate_after_connections: default_rotate_after_connections(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    80
}

fn default_tcp_port() -> u16 {
    27130
}

fn default_policy_port() -> u16 {
    27132
}

fn default_db_path() -> String {
    "rcc_server.db".to_string()
}

fn default_log_directory() -> String {
    "./debug_logs".to_string()
}

fn default_max_binary_log_size() -> usize {
    1000
}

fn default_console_hex_limit() -> usize {
    32
}

fn default_rotate_after_connections() -> u32 {
    10
}

fn default_true() -> bool {
    true
}
