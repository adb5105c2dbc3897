mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod strategy;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting pricing API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generation client once; every request shares it.
    let gemini = GeminiClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    if config.api_key.is_none() {
        warn!("API_KEY is not set; /ai/strategy will answer 500 until it is configured");
    }

    let state = AppState {
        generator: Arc::new(gemini),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
