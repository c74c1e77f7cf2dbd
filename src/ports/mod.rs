//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat-completion provider producing the name analysis
//! - `DomainSearch` - Related domain name lookup

mod ai_provider;
mod domain_search;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use domain_search::{DomainSearch, DomainSearchError};
