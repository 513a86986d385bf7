// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipe_store::server::{ServerConfig, ServiceConfig, run_server};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-store")]
#[command(author, version, about = "In-memory recipe service with tag search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the recipe API (the default when no command is given)
    Serve {
        /// Address to listen on (default: 0.0.0.0:8080)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// JSON file to seed recipes from (default: recipes.json)
        #[arg(short, long)]
        data_file: Option<PathBuf>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Resolve the server config: flags override the file, the file overrides defaults
fn resolve_config(
    bind: Option<SocketAddr>,
    data_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<ServerConfig> {
    let mut config = match config_path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ServiceConfig::load(&path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?
                .to_server_config()?
        }
        None => ServerConfig::default(),
    };

    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.command {
        Some(Commands::Serve {
            bind,
            data_file,
            config,
        }) => resolve_config(bind, data_file, config)?,
        None => ServerConfig::default(),
    };

    run_server(config).await
}
