//! QueueCalc - Main Entry Point
//! JSON-RPC server around the M/M/c capacity-planning core

mod config;
mod telemetry;

use anyhow::{Context, Result};
use tracing::info;

use config::DaemonConfig;
use queuecalc_api_rpc::RpcServer;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration (needed before logging: it picks the log format)
    let config = DaemonConfig::from_env().context("Invalid configuration")?;

    // 2. Initialize logging (+ OpenTelemetry when built with `telemetry`)
    telemetry::init(config.log_format).context("Failed to initialize logging")?;

    info!("QueueCalc v{} starting...", VERSION);
    info!(
        host = %config.rpc_host,
        port = config.rpc_port,
        max_servers = config.optimizer.max_servers,
        "Configuration loaded"
    );

    // 3. Start JSON-RPC server
    let server = RpcServer::new(config.rpc_server_config())
        .start()
        .await
        .context("RPC server start failed")?;

    info!(addr = %server.local_addr, "System ready. Press Ctrl+C to shutdown");

    // 4. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 5. Graceful shutdown: stop accepting, let in-flight calls finish
    server
        .handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    server.handle.stopped().await;

    info!("Shutdown complete.");

    Ok(())
}
