//! Gateway binary entry point.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use frx_gateway::config::loader::load_config;
use frx_gateway::http::GatewayServer;
use frx_gateway::lifecycle::{signals, Shutdown};
use frx_gateway::observability::logging::init_tracing;

/// Forwarding gateway in front of the FRX fraud-detection service.
#[derive(Debug, Parser)]
#[command(name = "frx-gateway", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args.config)?;
    init_tracing(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream = %config.service.authority(),
        request_timeout_secs = config.timeouts.request_secs,
        "frx-gateway starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(signals::watch_signals(shutdown));

    let server = GatewayServer::new(config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
