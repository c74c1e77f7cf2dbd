//! Application router - composes the endpoint routers with the shared
//! middleware stack (request IDs, tracing, CORS, timeout).

use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json, Router};
use http::{header, HeaderValue, Method, StatusCode};
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::health::health_routes;
use super::naming::{naming_routes, ErrorResponse, NamingAppState};

/// Builds the full HTTP application.
///
/// Outermost first: set request id, propagate it, trace, CORS, timeout.
pub fn build_router(state: NamingAppState, server: &ServerConfig) -> Router {
    let timeout = server.request_timeout();

    Router::new()
        .merge(naming_routes().with_state(state))
        .merge(health_routes())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    middleware_error(err, timeout)
                }))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Renders middleware failures in the same `{error, code}` shape as handlers.
fn middleware_error(err: BoxError, timeout: Duration) -> Response {
    let (status, body) = if err.is::<Elapsed>() {
        tracing::error!(timeout_secs = timeout.as_secs(), "Request timed out");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(
                "REQUEST_TIMEOUT",
                format!("request timed out after {}s", timeout.as_secs()),
            ),
        )
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("INTERNAL_ERROR", err.to_string()),
        )
    };

    (status, Json(body)).into_response()
}

/// Any origin when `origins` is empty; otherwise only the listed ones.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
