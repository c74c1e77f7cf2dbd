//! Integration tests for the name analysis endpoint.
//!
//! These tests run the full router with the real OpenAI and Domainr adapters
//! pointed at local mock servers:
//! 1. A valid name returns the analysis and the related domains
//! 2. Missing or empty names are rejected with 400
//! 3. An unreachable domain search degrades to `domains: []`
//! 4. An unreachable chat-completion API fails the request with 500

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use brand_check::adapters::ai::{OpenAIConfig, OpenAIProvider};
use brand_check::adapters::domain_search::{DomainrConfig, DomainrSearch};
use brand_check::adapters::http::{build_router, NamingAppState};
use brand_check::application::handlers::{AnalysisOptions, AnalyzeNameHandler};
use brand_check::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Base URL nothing listens on.
const UNREACHABLE: &str = "http://127.0.0.1:1";

fn app(openai_url: &str, domainr_url: &str) -> Router {
    app_with_retries(openai_url, domainr_url, 0)
}

fn app_with_retries(openai_url: &str, domainr_url: &str, max_retries: u32) -> Router {
    let ai = OpenAIProvider::new(
        OpenAIConfig::new("sk-test")
            .with_base_url(openai_url)
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(max_retries),
    )
    .unwrap();
    let search = DomainrSearch::new(
        DomainrConfig::new("rapid-test")
            .with_base_url(domainr_url)
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let handler = AnalyzeNameHandler::new(Arc::new(ai), Arc::new(search)).with_options(
        AnalysisOptions {
            max_domains: 3,
            ..Default::default()
        },
    );

    build_router(
        NamingAppState::new(Arc::new(handler)),
        &ServerConfig::default(),
    )
}

async fn mock_openai<'a>(server: &'a MockServer, content: &str) -> httpmock::Mock<'a> {
    let body = json!({
        "model": "gpt-4o",
        "choices": [{
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 80, "completion_tokens": 200}
    });

    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test");
            then.status(200).json_body(body);
        })
        .await
}

async fn mock_domainr<'a>(server: &'a MockServer, domains: &[&str]) -> httpmock::Mock<'a> {
    let results: Vec<Value> = domains
        .iter()
        .map(|d| {
            let zone = d.rsplit('.').next().unwrap_or_default();
            json!({"domain": d, "zone": zone})
        })
        .collect();

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/search")
                .header("x-rapidapi-key", "rapid-test");
            then.status(200).json_body(json!({"results": results}));
        })
        .await
}

async fn post_name(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze-name")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn valid_name_returns_analysis_and_domains() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    let chat = mock_openai(&openai, "Nimbus suggests lightness and the sky.").await;
    let search = mock_domainr(&domainr, &["nimbus.io", "nimbus.dev"]).await;

    let (status, body) = post_name(
        app(&openai.base_url(), &domainr.base_url()),
        json!({"name": "Nimbus"}),
    )
    .await;

    chat.assert_async().await;
    search.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nimbus");
    assert_eq!(body["analysis"], "Nimbus suggests lightness and the sky.");
    assert_eq!(
        body["domains"],
        json!([
            {"domain": "nimbus.io", "zone": "io"},
            {"domain": "nimbus.dev", "zone": "dev"}
        ])
    );
}

#[tokio::test]
async fn domains_are_capped() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    mock_openai(&openai, "Fine.").await;
    mock_domainr(&domainr, &["a.com", "a.io", "a.dev", "a.app", "a.co"]).await;

    let (status, body) = post_name(
        app(&openai.base_url(), &domainr.base_url()),
        json!({"name": "A"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_name_yields_400_without_upstream_calls() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    let chat = mock_openai(&openai, "unused").await;
    let search = mock_domainr(&domainr, &[]).await;

    for body in [json!({}), json!({"name": ""}), json!({"name": "   "}), json!({"name": null})] {
        let (status, response) =
            post_name(app(&openai.base_url(), &domainr.base_url()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"], "Name is required");
    }

    assert_eq!(chat.hits_async().await, 0);
    assert_eq!(search.hits_async().await, 0);
}

#[tokio::test]
async fn unreachable_domain_search_still_returns_200() {
    let openai = MockServer::start_async().await;
    mock_openai(&openai, "Solid and trustworthy.").await;

    let (status, body) = post_name(
        app(&openai.base_url(), UNREACHABLE),
        json!({"name": "Anchor"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"], "Solid and trustworthy.");
    assert_eq!(body["domains"], json!([]));
}

#[tokio::test]
async fn failing_domain_search_still_returns_200() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    mock_openai(&openai, "Solid and trustworthy.").await;
    domainr
        .mock_async(|when, then| {
            when.method(GET).path("/v2/search");
            then.status(500).body("internal error");
        })
        .await;

    let (status, body) = post_name(
        app(&openai.base_url(), &domainr.base_url()),
        json!({"name": "Anchor"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domains"], json!([]));
}

#[tokio::test]
async fn unreachable_chat_api_returns_500() {
    let domainr = MockServer::start_async().await;
    let search = mock_domainr(&domainr, &["anchor.com"]).await;

    let (status, body) = post_name(
        app(UNREACHABLE, &domainr.base_url()),
        json!({"name": "Anchor"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(search.hits_async().await, 0);
}

#[tokio::test]
async fn quota_exhaustion_returns_500_with_provider_message() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    let chat = openai
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).json_body(json!({
                "error": {
                    "message": "You exceeded your current quota, please check your plan and billing details.",
                    "type": "insufficient_quota",
                    "code": "insufficient_quota"
                }
            }));
        })
        .await;

    let (status, body) = post_name(
        app_with_retries(&openai.base_url(), &domainr.base_url(), 2),
        json!({"name": "Anchor"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "AI_PROVIDER_ERROR");
    assert_eq!(
        body["error"],
        "quota exceeded: You exceeded your current quota, please check your plan and billing details."
    );
    assert_eq!(chat.hits_async().await, 1);
}

#[tokio::test]
async fn rate_limit_message_reaches_client() {
    let openai = MockServer::start_async().await;
    let domainr = MockServer::start_async().await;
    openai
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).json_body(json!({
                "error": {
                    "message": "Rate limit reached for gpt-4o. Please try again in 1s.",
                    "code": "rate_limit_exceeded"
                }
            }));
        })
        .await;

    let (status, body) = post_name(
        app(&openai.base_url(), &domainr.base_url()),
        json!({"name": "Anchor"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "rate limited: Rate limit reached for gpt-4o. Please try again in 1s."
    );
}
