//! Retail Sales Pipeline - Main Entry Point

use api::{init_logging, run_server, AppConfig, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Retail AI Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting sales dashboard and forecasting service...");

    let config = AppConfig::load()?;
    let state = Arc::new(AppState::new(config));

    run_server(state).await
}
