//! Calculator HTTP Server Binary
//!
//! This is the main entry point for the calculator REST API server.
//! It opens the calculation store, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run against ./calculator.db (default)
//! cargo run --bin calculator-server
//!
//! # Run with a throwaway in-memory store
//! REPOSITORY_TYPE=local cargo run --bin calculator-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `DATABASE_URL`: SQLite path or `sqlite://` URL (default: calculator.db)
//! - `REPOSITORY_TYPE`: `sqlite` (default) or `local`
//! - `REPOSITORY_CONFIG`: Optional path to a repository.toml file
//! - `RUST_LOG`: Log filter directives (default: info)

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use calculator_rust::config::ServerConfig;
use calculator_rust::db::RepositoryFactory;
use calculator_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter())
        .with_target(true)
        .with_thread_ids(true)
        .init();

    if let Err(e) = run().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Directives from `RUST_LOG` (e.g. `info,calculator_rust=debug`); `info` when
/// unset or unparsable.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

async fn run() -> anyhow::Result<()> {
    info!("Starting Calculator HTTP Server");

    let repository = RepositoryFactory::from_env()
        .await
        .context("Failed to initialize database")?;
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    let config = ServerConfig::from_env();
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
