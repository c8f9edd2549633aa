mod config;
mod document;
mod errors;
mod generation;
mod profile;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::default_page_config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FsBlobStore;

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

    info!("Starting portfolio generator v{}", env!("CARGO_PKG_VERSION"));

    let store = FsBlobStore::open(&config.output_dir)
        .await
        .with_context(|| format!("Cannot create output dir {}", config.output_dir.display()))?;

    // A4, 36pt margins, Helvetica title/heading/body presets
    let page_config = default_page_config();
    info!(
        "Page config: {}x{}pt, body {}pt",
        page_config.width_pt, page_config.height_pt, page_config.body.size_pt
    );

    let state = AppState {
        store: Arc::new(store),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST:PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
