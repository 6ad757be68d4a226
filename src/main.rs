// src/main.rs
use models::{CliApp, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod models;
mod pitch;
mod resolver;
mod search;
mod web_scraper;

use config::{load_config, Config};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    std::env::set_var("RUST_LOG", "sales_agent=info,hyper=warn,reqwest=warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("sales_agent=info".parse().unwrap()),
        )
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting sales agent session");

    let app = CliApp::new(config)?;

    // Add graceful shutdown
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }

    Ok(())
}
