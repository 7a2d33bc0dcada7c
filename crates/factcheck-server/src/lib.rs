//! Factcheck Server
//!
//! HTTP backend that fact-checks uploaded PDFs: claims are extracted with an
//! LLM, checked against live web search and adjudicated by the same LLM.
//!
//! # Endpoints
//!
//! - `POST /fact-check`: multipart form with a `file` field holding a PDF;
//!   returns one result per extracted claim
//! - `GET /health`: liveness

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod pipeline;

use config::{ConfigError, ServiceConfig};
use factcheck_llm::{LlmError, OpenAiProvider};
use factcheck_search::{SearchError, TavilyClient};
use handlers::{create_router, AppState};
use pipeline::FactChecker;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// LLM provider could not be built
    #[error("LLM provider error: {0}")]
    Llm(#[from] LlmError),

    /// Search provider could not be built
    #[error("Search provider error: {0}")]
    Search(#[from] SearchError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the production state: OpenAI for completions, Tavily for search
pub fn build_state(config: &ServiceConfig) -> Result<AppState<OpenAiProvider, TavilyClient>, ServerError> {
    let llm = OpenAiProvider::new(
        config.llm.api_key.clone().unwrap_or_default(),
        config.llm.model.clone(),
    )?
    .with_base_url(config.llm.base_url.clone())
    .with_temperature(config.llm.temperature)
    .with_timeout(config.llm.timeout_secs.map(Duration::from_secs));

    let search = TavilyClient::with_timeout(
        config.search.api_key.clone().unwrap_or_default(),
        Duration::from_secs(config.search.timeout_secs),
    )?
    .with_base_url(config.search.base_url.clone())
    .with_max_results(config.search.max_results);

    let checker = FactChecker::new(
        Arc::new(llm),
        Arc::new(search),
        config.extractor.clone(),
        config.verifier.clone(),
    );
    Ok(AppState::new(checker))
}

/// Start the HTTP server
///
/// Validates configuration, builds the providers and serves until the
/// process is stopped.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting fact-checking backend");
    info!("Bind address: {}", config.bind_addr());
    info!("LLM model: {} (temperature {})", config.llm.model, config.llm.temperature);
    info!(
        "Prompts: extraction {}, verification {}",
        config.extractor.prompt.version, config.verifier.prompt.version
    );

    let state = build_state(&config)?;
    let app = create_router(state, config.server.max_upload_bytes);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
