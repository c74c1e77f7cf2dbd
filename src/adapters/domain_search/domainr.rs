//! Domainr Search - Implementation of DomainSearch for the Domainr API on RapidAPI.
//!
//! Calls `GET {base_url}/v2/search?query=<name>` with the RapidAPI key and
//! host headers and maps each result to a `DomainSuggestion`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use crate::config::DomainSearchConfig;
use crate::domain::naming::{BrandName, DomainSuggestion};
use crate::ports::{DomainSearch, DomainSearchError};

/// Configuration for the Domainr client.
#[derive(Debug, Clone)]
pub struct DomainrConfig {
    api_key: Secret<String>,
    /// Value sent as `X-RapidAPI-Host`.
    pub api_host: String,
    /// Base URL for the API (default: https://domainr.p.rapidapi.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DomainrConfig {
    /// Creates a new configuration with the given RapidAPI key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            api_host: "domainr.p.rapidapi.com".to_string(),
            base_url: "https://domainr.p.rapidapi.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Builds the client configuration from application settings.
    pub fn from_app_config(config: &DomainSearchConfig) -> Self {
        Self::new(config.api_key.clone().unwrap_or_default())
            .with_api_host(config.api_host.clone())
            .with_base_url(config.base_url.clone())
            .with_timeout(config.timeout())
    }

    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Domainr API client.
pub struct DomainrSearch {
    config: DomainrConfig,
    client: Client,
}

impl DomainrSearch {
    /// Creates a new Domainr client with the given configuration.
    pub fn new(config: DomainrConfig) -> Result<Self, DomainSearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainSearchError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn search_url(&self) -> String {
        format!("{}/v2/search", self.config.base_url)
    }

    async fn send_request(&self, name: &BrandName) -> Result<Response, DomainSearchError> {
        self.client
            .get(self.search_url())
            .query(&[("query", name.as_str())])
            .header("X-RapidAPI-Key", self.config.api_key())
            .header("X-RapidAPI-Host", self.config.api_host.as_str())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainSearchError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    DomainSearchError::network(format!("Connection failed: {}", e))
                } else {
                    DomainSearchError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, DomainSearchError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(DomainSearchError::AuthenticationFailed),
            429 => Err(DomainSearchError::RateLimited),
            code => Err(DomainSearchError::upstream(code, body)),
        }
    }
}

#[async_trait]
impl DomainSearch for DomainrSearch {
    async fn search(&self, name: &BrandName) -> Result<Vec<DomainSuggestion>, DomainSearchError> {
        let response = self.send_request(name).await?;
        let response = self.handle_response_status(response).await?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| DomainSearchError::parse(format!("Failed to parse response: {}", e)))?;

        let suggestions: Vec<DomainSuggestion> = body
            .results
            .into_iter()
            .filter(|r| !r.domain.is_empty())
            .map(SearchResult::into_suggestion)
            .collect();

        tracing::debug!(name = %name, count = suggestions.len(), "Domainr search completed");

        Ok(suggestions)
    }
}

// ----- Domainr API Types -----

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    domain: String,
    #[serde(default)]
    zone: String,
    #[serde(rename = "registerURL")]
    register_url: Option<String>,
}

impl SearchResult {
    fn into_suggestion(self) -> DomainSuggestion {
        let zone = if self.zone.is_empty() {
            self.domain
                .rsplit_once('.')
                .map(|(_, tld)| tld.to_string())
                .unwrap_or_default()
        } else {
            self.zone
        };

        let suggestion = DomainSuggestion::new(self.domain, zone);
        match self.register_url.filter(|u| !u.is_empty()) {
            Some(url) => suggestion.with_register_url(url),
            None => suggestion,
        }
    }
}
