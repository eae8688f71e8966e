//! Playing Cards API - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Create the seeded in-memory card store
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use playing_cards_api::{app, config::Config, store::CardStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(port = config.port, host = %config.host, "Configuration loaded");

    let store = CardStore::seeded();
    let app = app::build_router(store);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        "Playing cards API listening on http://localhost:{}",
        config.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
