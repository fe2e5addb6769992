//! Binary crate for the `tempify` weather proxy.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Installing the log subscriber
//! - Starting the HTTP server

use clap::Parser;
use std::path::PathBuf;
use tempify_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tempify", version, about = "Tempify weather API proxy")]
struct Cli {
    /// Path to a TOML config file; defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Port to listen on; overrides PORT and the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    tempify_server::run_server(&config).await
}
