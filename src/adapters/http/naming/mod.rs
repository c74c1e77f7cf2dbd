//! HTTP adapter for name analysis.
//!
//! - `POST /analyze-name` - Analyze a brand name and suggest related domains

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeNameRequest, AnalyzeNameResponse, DomainSuggestionDto, ErrorResponse};
pub use handlers::{AnalysisApiError, NamingAppState};
pub use routes::naming_routes;
