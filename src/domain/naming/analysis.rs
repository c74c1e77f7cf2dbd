//! Analysis result types.

use serde::{Deserialize, Serialize};

use super::brand_name::BrandName;

/// A domain name related to the analyzed brand name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    /// Fully qualified domain, e.g. `acme.io`.
    pub domain: String,
    /// Top-level zone the domain lives in, e.g. `io`.
    pub zone: String,
    /// Registrar link for the domain, when the search API offers one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
}

impl DomainSuggestion {
    pub fn new(domain: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            zone: zone.into(),
            register_url: None,
        }
    }

    pub fn with_register_url(mut self, url: impl Into<String>) -> Self {
        self.register_url = Some(url.into());
        self
    }
}

/// Merged outcome of one analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct NameAnalysis {
    pub name: BrandName,
    pub analysis: String,
    pub domains: Vec<DomainSuggestion>,
}

impl NameAnalysis {
    pub fn new(name: BrandName, analysis: impl Into<String>) -> Self {
        Self {
            name,
            analysis: analysis.into(),
            domains: Vec::new(),
        }
    }

    pub fn with_domains(mut self, domains: Vec<DomainSuggestion>) -> Self {
        self.domains = domains;
        self
    }
}
