use std::sync::Arc;

use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_core::{Config, upstream_from_config};

use crate::{
    handlers::AppState,
    server::{self, ServerConfig},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "AQI and weather HTTP gateway")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP gateway.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "WEATHER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, env = "WEATHER_PORT", default_value_t = 8000)]
        port: u16,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { host, port } => serve(ServerConfig { host, port }).await,
            Command::Configure => configure(),
        }
    }
}

async fn serve(server_config: ServerConfig) -> anyhow::Result<()> {
    let config = Config::load()?;

    if config.api_key().is_none() {
        tracing::warn!(
            "No OpenWeather API key configured; /aqi and /weather will answer 500. \
             Set OPENWEATHER_API_KEY or run `weather-server configure`."
        );
    }

    let upstream = upstream_from_config(&config)?;
    server::run(server_config, AppState::new(Arc::from(upstream))).await
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(())
}
