//! Naming Module - Brand name value object and analysis results.
//!
//! # Components
//!
//! - `BrandName` - Validated, trimmed brand name
//! - `AnalysisPrompt` - Fixed connotation-analysis prompt built from a name
//! - `NameAnalysis` - Merged result of the analysis and domain suggestions
//! - `DomainSuggestion` - A related domain name returned by a domain search

mod analysis;
mod brand_name;
mod errors;
mod prompt;

pub use analysis::{DomainSuggestion, NameAnalysis};
pub use brand_name::{BrandName, MAX_NAME_LENGTH};
pub use errors::NameError;
pub use prompt::{AnalysisPrompt, SYSTEM_PROMPT};
