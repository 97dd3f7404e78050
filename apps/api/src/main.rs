mod config;
mod enhance;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod parsing;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhance::Enhancer;
use crate::extraction::ExtractionLimits;
use crate::llm_client::{CompletionProvider, DisabledProvider, GeminiClient, GeminiConfig};
use crate::parsing::{ParserConfig, ResumeParser};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion provider
    let provider = build_provider(&config)?;

    let state = AppState {
        parser: ResumeParser::new(
            provider.clone(),
            ParserConfig {
                prompt_text_limit: config.prompt_text_limit,
            },
        ),
        enhancer: Enhancer::new(provider),
        extraction_limits: ExtractionLimits {
            min_chars: config.min_extracted_chars,
        },
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Gemini when a key is configured; otherwise every enrichment call is unavailable
/// and the offline paths answer.
fn build_provider(config: &Config) -> Result<Arc<dyn CompletionProvider>> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        warn!("GEMINI_API_KEY not set; AI enrichment disabled");
        return Ok(Arc::new(DisabledProvider));
    };
    let client = GeminiClient::new(GeminiConfig {
        endpoint: config.gemini_endpoint.clone(),
        api_key,
        timeout: config.enrichment_timeout(),
    })?;
    info!(
        "Completion client initialized (timeout: {}s)",
        config.enrichment_timeout_secs
    );
    Ok(Arc::new(client))
}
