//! HTTP routes for name analysis.

use axum::{routing::post, Router};

use super::handlers::{analyze_name, NamingAppState};

/// Creates the naming router.
///
/// Routes:
/// - `POST /analyze-name` - Analyze a brand name
pub fn naming_routes() -> Router<NamingAppState> {
    Router::new().route("/analyze-name", post(analyze_name))
}
