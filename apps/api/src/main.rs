mod career;
mod config;
mod errors;
mod extract;
mod interview;
mod llm_client;
mod models;
mod roles;
mod routes;
mod session;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roles::RoleCatalog;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPilot API v{}", env!("CARGO_PKG_VERSION"));

    // Interview role catalog
    let roles = match &config.role_catalog_path {
        Some(path) => RoleCatalog::from_json_file(path)
            .with_context(|| format!("ROLE_CATALOG_PATH={path}"))?,
        None => RoleCatalog::builtin(),
    };
    info!("Role catalog loaded ({} roles)", roles.roles().len());

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_api_base,
        config.gemini_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    let sessions = SessionStore::new(
        Duration::from_secs(config.session_idle_ttl_secs),
        config.max_sessions,
    );
    info!(
        "Session store: idle TTL {}s, cap {}",
        config.session_idle_ttl_secs, config.max_sessions
    );

    let state = AppState::new(Arc::new(llm), roles, sessions);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
