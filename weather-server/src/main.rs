//! Binary crate for the `weather-server` gateway.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Serving `/health`, `/aqi` and `/weather` over HTTP

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod handlers;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
