mod assistant;
mod catalog;
mod config;
mod dashboard;
mod errors;
mod extractors;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::seed::seed_reference_data;
use crate::config::Config;
use crate::llm_client::GroqClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::Catalog;

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

    info!("Starting Cropmet API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory record store with the reference dataset
    let catalog = Arc::new(Catalog::new());
    seed_reference_data(&catalog);
    let counts = catalog.counts();
    info!(
        "Seeded reference data: {} crops, {} compounds, {} environment records",
        counts.crops, counts.compounds, counts.environment
    );

    // Initialize the completion client; a missing key degrades the AI
    // endpoints instead of failing startup
    let llm = GroqClient::new(config.groq_api_key.clone(), config.groq_model.clone());
    if llm.is_configured() {
        info!("Completion client initialized (model: {})", config.groq_model);
    } else {
        warn!("GROQ_API_KEY not set; AI endpoints will return configuration errors");
    }

    // Build app state
    let state = AppState {
        catalog,
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
