//! Error types for the application.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Identity store error: {0}")]
    IdentityStore(#[from] IdentityStoreError),

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },

    #[error("Missing required field: {field}")]
    #[allow(dead_code)]
    MissingField { field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Protocol-related errors (game wire format).
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid packet: {message}")]
    InvalidPacket { message: String },

    #[error("Packet too short: need {needed} bytes, got {got}")]
    PacketTooShort { needed: usize, got: usize },

    #[error("Invalid string encoding: {message}")]
    InvalidString { message: String },

    #[error("Malformed frame: {message}")]
    MalformedFrame { message: String },

    #[error("Frame of {size} bytes exceeds the {cap} byte cap")]
    FrameTooLarge { size: usize, cap: usize },

    #[error("Authentication failed: {reason}")]
    #[allow(dead_code)]
    AuthFailed { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connection-related errors.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Failed to bind {host}:{port}: {source}")]
    BindFailed {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection closed by remote")]
    ConnectionClosed,

    #[error("Connection timeout")]
    Timeout,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Identity-store related errors (player resolution, SQLite backend).
#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Identity store task panicked: {message}")]
    TaskFailed { message: String },
}

/// Result type alias using AppError.
#[allow(dead_code)]
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

/// Result type alias for connection operations.
#[allow(dead_code)]
pub type ConnectionResult<T> = std::result::Result<T, ConnectionError>;

/// Result type alias for identity store operations.
pub type IdentityStoreResult<T> = std::result::Result<T, IdentityStoreError>;
