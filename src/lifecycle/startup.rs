//! Startup orchestration shared by both binaries.
//!
//! Order: load config → init logging → bind listener → serve. Any startup
//! error is fatal and propagates to `main`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use crate::config::{load_config, AppConfig};
use crate::http::{HttpServer, Variant};
use crate::lifecycle::Shutdown;
use crate::observability::logging;

/// Command-line arguments accepted by both servers.
#[derive(Debug, Parser)]
#[command(version, about = "Reflected XSS demo server", long_about = None)]
pub struct Cli {
    /// Optional TOML file overriding the built-in defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Resolve the effective configuration.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, crate::config::ConfigError> {
    match &cli.config {
        Some(path) => load_config(path),
        None => Ok(AppConfig::default()),
    }
}

/// Parse arguments, then run `variant` until shutdown.
pub async fn launch(variant: Variant) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    logging::init(&config.observability);

    tracing::info!(
        variant = %variant,
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    HttpServer::new(variant).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
