//! HTTP DTOs for name analysis.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::naming::{DomainSuggestion, NameAnalysis, NameError};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to analyze a name.
///
/// `name` is kept loosely typed so that a missing, `null` or non-string
/// value is reported as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeNameRequest {
    #[serde(default)]
    pub name: Option<Value>,
}

impl AnalyzeNameRequest {
    /// Extracts the raw name string.
    pub fn into_name(self) -> Result<String, NameError> {
        match self.name {
            None | Some(Value::Null) => Err(NameError::Required),
            Some(Value::String(name)) => Ok(name),
            Some(_) => Err(NameError::NotAString),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A related domain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSuggestionDto {
    pub domain: String,
    pub zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_url: Option<String>,
}

impl From<DomainSuggestion> for DomainSuggestionDto {
    fn from(suggestion: DomainSuggestion) -> Self {
        Self {
            domain: suggestion.domain,
            zone: suggestion.zone,
            register_url: suggestion.register_url,
        }
    }
}

/// Successful analysis response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeNameResponse {
    pub name: String,
    pub analysis: String,
    pub domains: Vec<DomainSuggestionDto>,
}

impl From<NameAnalysis> for AnalyzeNameResponse {
    fn from(result: NameAnalysis) -> Self {
        Self {
            name: result.name.into_inner(),
            analysis: result.analysis,
            domains: result.domains.into_iter().map(Into::into).collect(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
