//! Application handlers.
//!
//! Command handlers that orchestrate the ports.

pub mod naming;

pub use naming::{AnalysisOptions, AnalyzeNameCommand, AnalyzeNameError, AnalyzeNameHandler};
