//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Chat-completion providers (OpenAI, mock)
//! - `domain_search` - Domain search clients (Domainr, disabled, mock)
//! - `http` - Axum REST API

pub mod ai;
pub mod domain_search;
pub mod http;
