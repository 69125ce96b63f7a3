mod auth;
mod chat;
mod config;
mod dashboard;
mod datasets;
mod errors;
mod jobs;
mod llm_client;
mod routes;
mod state;
mod theme;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::HttpCompletionClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so logging can honor RUST_LOG from .env
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("yogig_api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting YoGig API v{}", env!("CARGO_PKG_VERSION"));

    // Parse the embedded datasets once; they are immutable for the process lifetime
    let jobs = datasets::load_jobs()?;
    let proposals = datasets::load_proposals()?;
    let transactions = datasets::load_transactions()?;
    info!(
        "Datasets loaded: {} jobs, {} proposals, {} transactions",
        jobs.len(),
        proposals.len(),
        transactions.len()
    );

    // Initialize the completion client. An empty token is allowed here: it
    // surfaces as the support fallback on the first chat call, not at startup.
    let llm = Arc::new(HttpCompletionClient::new(&config));
    info!(
        "Completion client initialized (model: {})",
        config.completion_model
    );

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        jobs: Arc::new(jobs),
        proposals: Arc::new(proposals),
        transactions: Arc::new(transactions),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS once the web origin is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
