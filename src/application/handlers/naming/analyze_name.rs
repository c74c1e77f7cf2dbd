//! AnalyzeNameHandler - Connotation analysis plus related domain suggestions.
//!
//! The analysis is mandatory: any provider failure fails the request.
//! The domain search is best effort: failures are logged and yield no domains.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::naming::{
    AnalysisPrompt, BrandName, DomainSuggestion, NameAnalysis, NameError, SYSTEM_PROMPT,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, DomainSearch, MessageRole};

/// Command to analyze a proposed brand name.
#[derive(Debug, Clone)]
pub struct AnalyzeNameCommand {
    pub name: String,
}

impl AnalyzeNameCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Tuning applied to every analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub max_domains: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: None,
            max_domains: 10,
        }
    }
}

/// Error type for name analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeNameError {
    /// The supplied name was rejected.
    #[error(transparent)]
    Validation(#[from] NameError),

    /// The chat-completion provider failed.
    #[error(transparent)]
    Analysis(#[from] AIError),
}

/// Handler for analyzing names.
pub struct AnalyzeNameHandler {
    ai_provider: Arc<dyn AIProvider>,
    domain_search: Arc<dyn DomainSearch>,
    options: AnalysisOptions,
}

impl AnalyzeNameHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, domain_search: Arc<dyn DomainSearch>) -> Self {
        Self {
            ai_provider,
            domain_search,
            options: AnalysisOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub async fn handle(&self, cmd: AnalyzeNameCommand) -> Result<NameAnalysis, AnalyzeNameError> {
        // 1. Validate
        let name = BrandName::new(&cmd.name)?;

        // 2. Connotation analysis (mandatory)
        let analysis = self.analyze(&name).await?;

        // 3. Related domains (best effort)
        let domains = self.related_domains(&name).await;

        Ok(NameAnalysis::new(name, analysis).with_domains(domains))
    }

    async fn analyze(&self, name: &BrandName) -> Result<String, AIError> {
        let request = CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, AnalysisPrompt::for_name(name).into_inner())
            .with_max_tokens(self.options.max_tokens)
            .with_temperature(self.options.temperature);

        match self.ai_provider.complete(request).await {
            Ok(response) => {
                if response.is_truncated() {
                    tracing::warn!(
                        name = %name,
                        max_tokens = ?self.options.max_tokens,
                        "Name analysis hit the token cap and is truncated"
                    );
                }
                tracing::info!(
                    name = %name,
                    model = %response.model,
                    tokens = response.usage.total_tokens,
                    "Name analysis completed"
                );
                Ok(response.content)
            }
            Err(err) => {
                tracing::error!(name = %name, error = %err, "Name analysis failed");
                Err(err)
            }
        }
    }

    async fn related_domains(&self, name: &BrandName) -> Vec<DomainSuggestion> {
        match self.domain_search.search(name).await {
            Ok(suggestions) => dedup_and_cap(suggestions, self.options.max_domains),
            Err(err) => {
                tracing::warn!(name = %name, error = %err, "Domain search failed, returning no domains");
                Vec::new()
            }
        }
    }
}

/// Keeps the first occurrence of each domain (case-insensitive), up to `max`.
fn dedup_and_cap(suggestions: Vec<DomainSuggestion>, max: usize) -> Vec<DomainSuggestion> {
    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|s| seen.insert(s.domain.to_ascii_lowercase()))
        .take(max)
        .collect()
}
