//! LFCGM HTTP Server Binary
//!
//! This is the main entry point for the LFC Goal Machine REST API server.
//! It loads the scorer table and the dropdown catalog, sets up the HTTP
//! router, and starts serving requests. A data load failure is fatal: the
//! process exits before binding the listener.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lfcgm-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 5000)
//! - `LFCGM_SCORERS_CSV`: Scorer table path (default: data/lfc_scorers_tl_pos_age.csv)
//! - `LFCGM_DROPDOWN_CSV`: Dropdown catalog path (default: data/lfcgm_app_dropdown.csv)
//! - `LFCGM_CONFIG`: Optional TOML file supplying defaults for the above
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lfcgm_rust::config::AppConfig;
use lfcgm_rust::http::{create_router, AppState};
use lfcgm_rust::parsing::{load_dropdown_catalog, load_scorer_dataset};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting LFCGM HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load both data sources once; they are shared read-only for the life
    // of the process.
    let dataset = load_scorer_dataset(&config.scorers_csv)
        .with_context(|| format!("loading scorer table {}", config.scorers_csv.display()))?;
    let dropdown = load_dropdown_catalog(&config.dropdown_csv)
        .with_context(|| format!("loading dropdown catalog {}", config.dropdown_csv.display()))?;
    info!(
        "data sources loaded: {} scorer records, {} dropdown options",
        dataset.len(),
        dropdown.len()
    );

    // Create application state
    let state = AppState::new(Arc::new(dataset), Arc::new(dropdown));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
