//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the SpaceX Launch Records Dashboard.
//! It loads the launch dataset, sets up the HTTP router, and starts
//! serving the dashboard page and the chart API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin slrd-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DATA_FILE`: Launch records CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)
//!
//! All of these may also come from an optional `dashboard.toml`; the
//! environment wins when both are set.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use slrd_rust::config::DashboardConfig;
use slrd_rust::dataset::LaunchDataset;
use slrd_rust::http::{create_router, AppState};

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

    info!("Starting SpaceX Launch Records Dashboard");

    let config = DashboardConfig::from_default_location()?.with_env_overrides();

    // Load the dataset once, before binding; a missing or malformed file
    // must keep the server from starting at all.
    let dataset = LaunchDataset::load(&config.data.csv_path)?;
    info!(
        "Loaded {} launch records across {} sites (checksum {})",
        dataset.len(),
        dataset.sites().len(),
        &dataset.checksum()[..12.min(dataset.checksum().len())]
    );
    let domain = dataset.payload_domain();
    info!(
        "Payload domain: {} - {} kg",
        domain.min.value(),
        domain.max.value()
    );

    // Create application state
    let state = AppState::new(Arc::new(dataset));

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Dashboard available at http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
