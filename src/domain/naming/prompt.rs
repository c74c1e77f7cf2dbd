//! Connotation-analysis prompt.

use super::brand_name::BrandName;

/// System message sent ahead of every analysis prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that analyzes names and their connotations.";

/// The user prompt asking the model to analyze a brand name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    text: String,
}

impl AnalysisPrompt {
    /// Builds the fixed five-point analysis prompt for `name`.
    pub fn for_name(name: &BrandName) -> Self {
        let text = format!(
            "Please analyze the connotations, cultural significance, and potential implications of the name '{name}'. Consider:\n\
             1. Cultural meanings across different regions\n\
             2. Historical significance\n\
             3. Potential positive and negative associations\n\
             4. Similar sounding words or names\n\
             5. Overall impression and suitability as a brand name"
        );
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}
