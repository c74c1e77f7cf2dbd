//! HTTP handlers for name analysis.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::application::handlers::{AnalyzeNameCommand, AnalyzeNameError, AnalyzeNameHandler};
use crate::domain::naming::NameError;

use super::dto::{AnalyzeNameRequest, AnalyzeNameResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct NamingAppState {
    analyze_handler: Arc<AnalyzeNameHandler>,
}

impl NamingAppState {
    pub fn new(analyze_handler: Arc<AnalyzeNameHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /analyze-name - Analyze a brand name
pub async fn analyze_name(
    State(state): State<NamingAppState>,
    payload: Result<Json<AnalyzeNameRequest>, JsonRejection>,
) -> Result<Json<AnalyzeNameResponse>, AnalysisApiError> {
    let Json(req) = payload.map_err(|rejection| {
        AnalysisApiError::InvalidBody(rejection.body_text())
    })?;

    let name = req.into_name()?;
    let result = state
        .analyze_handler
        .handle(AnalyzeNameCommand::new(name))
        .await?;

    Ok(Json(result.into()))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum AnalysisApiError {
    /// Body was not valid JSON for this endpoint.
    InvalidBody(String),
    /// The name failed validation.
    Validation(NameError),
    /// The upstream analysis failed.
    Upstream(String),
}

impl From<NameError> for AnalysisApiError {
    fn from(err: NameError) -> Self {
        AnalysisApiError::Validation(err)
    }
}

impl From<AnalyzeNameError> for AnalysisApiError {
    fn from(err: AnalyzeNameError) -> Self {
        match err {
            AnalyzeNameError::Validation(err) => AnalysisApiError::Validation(err),
            AnalyzeNameError::Analysis(err) => AnalysisApiError::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_BODY", msg),
            ),
            AnalysisApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", err.to_string()),
            ),
            AnalysisApiError::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("AI_PROVIDER_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}
