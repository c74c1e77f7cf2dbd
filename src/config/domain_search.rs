//! Domain search configuration (Domainr via RapidAPI)

use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;

/// Domain search configuration.
///
/// The search is optional: without an API key the service answers with an
/// empty domain list.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainSearchConfig {
    /// RapidAPI key
    pub api_key: Option<String>,

    /// RapidAPI host header value
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Base URL of the search API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of suggestions returned to clients
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl DomainSearchConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if the search is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate domain search configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_enabled() {
            return Ok(());
        }
        if self.api_host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DOMAIN_SEARCH_API_HOST"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("domain_search.base_url"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_results == 0 || self.max_results > 100 {
            return Err(ValidationError::InvalidMaxResults);
        }
        Ok(())
    }
}

impl Default for DomainSearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_host: default_api_host(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_results: default_max_results(),
        }
    }
}

fn default_api_host() -> String {
    "domainr.p.rapidapi.com".to_string()
}

fn default_base_url() -> String {
    "https://domainr.p.rapidapi.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_results() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_disabled() {
        let config = DomainSearchConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.api_host, "domainr.p.rapidapi.com");
        assert_eq!(config.max_results, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_disabled_config_is_valid() {
        let config = DomainSearchConfig {
            base_url: "garbage".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_enabled_config_validation() {
        let config = DomainSearchConfig {
            api_key: Some("rapid-key".to_string()),
            ..Default::default()
        };
        assert!(config.is_enabled());
        assert!(config.validate().is_ok());

        let config = DomainSearchConfig {
            api_key: Some("rapid-key".to_string()),
            max_results: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxResults));

        let config = DomainSearchConfig {
            api_key: Some("rapid-key".to_string()),
            base_url: "ftp://domainr".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("domain_search.base_url"))
        );
    }
}
