// Life Coach Agent Entry Point
// Keyword advice and mood check-ins over a terminal chat

mod actors;
mod brain;
mod config;
mod error;
mod fs_manager;
mod logging;
mod memory;
mod models;
mod session;
mod transport;

#[cfg(test)]
mod tests;

use actors::coach_actor::CoachHandle;
use anyhow::Context;
use brain::coach::Coach;
use config::CoachConfig;
use fs_manager::PortablePathManager;
use tracing::{error, info};
use transport::TerminalTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = CoachConfig::from_env().context("Invalid coach configuration")?;
    logging::init(config.log_format)?;

    // Initialize File System (Portable)
    if let Err(e) = PortablePathManager::init(&config.data_dir, &config.memory_file) {
        error!("Failed to initialize data directory: {}", e);
    }

    let coach = Coach::from_config(&config).context("Failed to load the coach")?;
    let handle = CoachHandle::spawn(coach);

    let mut transport = TerminalTransport::new();
    let summary = session::run_session(&mut transport, &handle).await?;

    handle.shutdown().await?;
    info!("Goodbye after {} turns", summary.turns);
    Ok(())
}
