//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("server.request_timeout_secs ({request_secs}) must exceed the upstream budget of {required_secs}s")]
    RequestTimeoutTooShort { request_secs: u64, required_secs: u64 },

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid URL for {0}: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("Model name cannot be empty")]
    EmptyModel,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Domain search max_results must be between 1 and 100")]
    InvalidMaxResults,
}
