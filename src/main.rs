//! Brand Check server entry point.

use std::process::ExitCode;
use std::sync::Arc;

use brand_check::adapters::ai::{OpenAIConfig, OpenAIProvider};
use brand_check::adapters::domain_search::{DisabledDomainSearch, DomainrConfig, DomainrSearch};
use brand_check::adapters::http::{build_router, NamingAppState};
use brand_check::application::handlers::{AnalysisOptions, AnalyzeNameHandler};
use brand_check::config::AppConfig;
use brand_check::ports::{AIProvider, DomainSearch};
use brand_check::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let ai_provider: Arc<dyn AIProvider> = Arc::new(OpenAIProvider::new(
        OpenAIConfig::from_app_config(&config.ai),
    )?);
    let info = ai_provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider configured");

    let domain_search: Arc<dyn DomainSearch> = if config.domain_search.is_enabled() {
        tracing::info!(host = %config.domain_search.api_host, "Domain search enabled");
        Arc::new(DomainrSearch::new(DomainrConfig::from_app_config(
            &config.domain_search,
        ))?)
    } else {
        tracing::warn!("Domain search API key not set, responses will carry no domains");
        Arc::new(DisabledDomainSearch)
    };

    let handler = AnalyzeNameHandler::new(ai_provider, domain_search).with_options(AnalysisOptions {
        max_tokens: config.ai.max_tokens,
        temperature: config.ai.temperature,
        max_domains: config.domain_search.max_results,
    });

    let app = build_router(NamingAppState::new(Arc::new(handler)), &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
