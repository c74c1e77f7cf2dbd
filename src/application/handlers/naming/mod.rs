//! Naming handlers.

mod analyze_name;

pub use analyze_name::{
    AnalysisOptions, AnalyzeNameCommand, AnalyzeNameError, AnalyzeNameHandler,
};
