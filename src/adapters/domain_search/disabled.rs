//! Domain search stand-in used when no API key is configured.

use async_trait::async_trait;

use crate::domain::naming::{BrandName, DomainSuggestion};
use crate::ports::{DomainSearch, DomainSearchError};

/// A DomainSearch that never reaches a service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledDomainSearch;

#[async_trait]
impl DomainSearch for DisabledDomainSearch {
    async fn search(&self, _name: &BrandName) -> Result<Vec<DomainSuggestion>, DomainSearchError> {
        Err(DomainSearchError::NotConfigured)
    }
}
