//! Mock Domain Search for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::naming::{BrandName, DomainSuggestion};
use crate::ports::{DomainSearch, DomainSearchError};

#[derive(Debug, Clone)]
enum Outcome {
    Suggestions(Vec<DomainSuggestion>),
    Unreachable(String),
}

/// Mock domain search returning fixed suggestions or a network failure.
#[derive(Debug, Clone)]
pub struct MockDomainSearch {
    outcome: Outcome,
    searched: Arc<Mutex<Vec<String>>>,
}

impl MockDomainSearch {
    /// Returns the given suggestions for every search.
    pub fn with_suggestions(suggestions: Vec<DomainSuggestion>) -> Self {
        Self {
            outcome: Outcome::Suggestions(suggestions),
            searched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every search with a network error.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Unreachable(message.into()),
            searched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Names searched so far, in call order.
    pub fn searched_names(&self) -> Vec<String> {
        self.searched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl DomainSearch for MockDomainSearch {
    async fn search(&self, name: &BrandName) -> Result<Vec<DomainSuggestion>, DomainSearchError> {
        self.searched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(name.to_string());

        match &self.outcome {
            Outcome::Suggestions(suggestions) => Ok(suggestions.clone()),
            Outcome::Unreachable(message) => Err(DomainSearchError::network(message.clone())),
        }
    }
}
