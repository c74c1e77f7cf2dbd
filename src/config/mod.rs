//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BRAND_CHECK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use brand_check::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod domain_search;
mod error;
mod server;

pub use ai::{retry_backoff, AiConfig};
pub use domain_search::DomainSearchConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::time::Duration;

/// Unprefixed key name accepted as a fallback for `ai.openai_api_key`.
const PLAIN_OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat-completion provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Domain search configuration
    #[serde(default)]
    pub domain_search: DomainSearchConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BRAND_CHECK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BRAND_CHECK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BRAND_CHECK__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `BRAND_CHECK__DOMAIN_SEARCH__API_KEY=...` -> `domain_search.api_key = ...`
    ///
    /// A plain `OPENAI_API_KEY` is used when the prefixed key is absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(PLAIN_OPENAI_KEY_VAR) {
            builder = builder.set_default("ai.openai_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("BRAND_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.domain_search.validate()?;

        let required = self.upstream_budget();
        if self.server.request_timeout() <= required {
            return Err(ValidationError::RequestTimeoutTooShort {
                request_secs: self.server.request_timeout_secs,
                required_secs: required.as_secs(),
            });
        }
        Ok(())
    }

    /// Worst-case time spent in upstream calls for one request: the chat
    /// completion with all retries, then the domain search when enabled.
    pub fn upstream_budget(&self) -> Duration {
        let search = if self.domain_search.is_enabled() {
            self.domain_search.timeout()
        } else {
            Duration::ZERO
        };
        self.ai.worst_case_duration().saturating_add(search)
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "BRAND_CHECK__AI__OPENAI_API_KEY",
        "BRAND_CHECK__AI__MODEL",
        "BRAND_CHECK__DOMAIN_SEARCH__API_KEY",
        "BRAND_CHECK__SERVER__PORT",
        "BRAND_CHECK__SERVER__ENVIRONMENT",
        "BRAND_CHECK__SERVER__REQUEST_TIMEOUT_SECS",
        "BRAND_CHECK__AI__MAX_RETRIES",
        PLAIN_OPENAI_KEY_VAR,
    ];

    fn set_minimal_env() {
        env::set_var("BRAND_CHECK__AI__OPENAI_API_KEY", "sk-test");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.model, "gpt-4o");
        assert!(!config.domain_search.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BRAND_CHECK__AI__MODEL", "gpt-4o-mini");
        env::set_var("BRAND_CHECK__DOMAIN_SEARCH__API_KEY", "rapid-key");
        env::set_var("BRAND_CHECK__SERVER__PORT", "3000");
        env::set_var("BRAND_CHECK__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!(config.domain_search.is_enabled());
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }

    #[test]
    fn test_plain_openai_key_is_a_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(PLAIN_OPENAI_KEY_VAR, "sk-plain");
        let plain_only = AppConfig::load();
        env::set_var("BRAND_CHECK__AI__OPENAI_API_KEY", "sk-prefixed");
        let both = AppConfig::load();
        clear_env();

        assert_eq!(
            plain_only.unwrap().ai.openai_api_key.as_deref(),
            Some("sk-plain")
        );
        assert_eq!(both.unwrap().ai.openai_api_key.as_deref(), Some("sk-prefixed"));
    }

    #[test]
    fn test_default_request_timeout_covers_upstream_calls() {
        let mut config = AppConfig::default();
        config.ai.openai_api_key = Some("sk-test".to_string());
        config.domain_search.api_key = Some("rapid-key".to_string());

        assert_eq!(config.upstream_budget(), Duration::from_secs(70));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_request_timeout_shorter_than_retries_is_rejected() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BRAND_CHECK__AI__MAX_RETRIES", "2");
        let short = AppConfig::load();
        env::set_var("BRAND_CHECK__SERVER__REQUEST_TIMEOUT_SECS", "200");
        let long = AppConfig::load();
        clear_env();

        assert_eq!(
            short.unwrap().validate(),
            Err(ValidationError::RequestTimeoutTooShort {
                request_secs: 90,
                required_secs: 183,
            })
        );
        assert!(long.unwrap().validate().is_ok());
    }
}
