//! Domain Search Port - Interface for related-domain lookups.
//!
//! The search is an optional enrichment of an analysis: callers treat every
//! error from this port as "no suggestions".

use async_trait::async_trait;

use crate::domain::naming::{BrandName, DomainSuggestion};

/// Port for domain-name search services.
#[async_trait]
pub trait DomainSearch: Send + Sync {
    /// Returns domains related to `name`, in the order the service ranks them.
    async fn search(&self, name: &BrandName) -> Result<Vec<DomainSuggestion>, DomainSearchError>;
}

/// Domain search errors.
#[derive(Debug, thiserror::Error)]
pub enum DomainSearchError {
    /// No search service is configured.
    #[error("domain search is not configured")]
    NotConfigured,

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the search service.
    #[error("rate limited by domain search service")]
    RateLimited,

    /// The service answered with an unexpected status.
    #[error("upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Failed to parse the service response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl DomainSearchError {
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
