// src/server/mod.rs
//! Recipe HTTP server
//!
//! Serves the in-memory recipe collection over five JSON routes:
//! - `GET /recipes` - list every recipe
//! - `POST /recipes` - create a recipe
//! - `PUT /recipes/:id` - replace a recipe
//! - `DELETE /recipes/:id` - delete a recipe
//! - `GET /recipes/search?tag=X` - case-insensitive tag filter
//!
//! plus `/health` and `/metrics` for operators.

pub mod config;
mod handlers;
pub mod metrics;
mod routes;

pub use config::ServiceConfig;
pub use metrics::{MetricsSnapshot, ServerMetrics};
pub use routes::create_router;

use crate::store::{DEFAULT_DATA_FILE, RecipeStore, load_recipes};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// JSON file the collection is seeded from at startup
    pub data_file: PathBuf,
    /// Attach a permissive CORS layer
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            enable_cors: true,
        }
    }
}

/// Shared server state, handed to every handler
pub struct ServerState {
    pub config: ServerConfig,
    pub store: RecipeStore,
    pub metrics: ServerMetrics,
}

/// Handle type the router is built over
pub type SharedState = Arc<ServerState>;

impl ServerState {
    /// Build state, seeding the store from `config.data_file`
    pub fn new(config: ServerConfig) -> Self {
        let store = RecipeStore::with_recipes(load_recipes(&config.data_file));
        Self::with_store(config, store)
    }

    /// Build state around an existing store (no seed file is read)
    pub fn with_store(config: ServerConfig, store: RecipeStore) -> Self {
        Self {
            config,
            store,
            metrics: ServerMetrics::new(),
        }
    }
}

/// Start the recipe server and serve until the listener fails
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting recipe server on {}", config.bind_addr);
    tracing::info!("Seed file: {:?}", config.data_file);

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::new(config));
    tracing::info!("Serving {} recipes", state.store.len());

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Recipe server is ready");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.data_file, PathBuf::from("recipes.json"));
        assert!(config.enable_cors);
    }

    #[test]
    fn test_state_seeds_from_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("recipes.json");
        std::fs::write(&data_file, r#"[{"id": "x1", "name": "Tacos"}]"#).unwrap();

        let state = ServerState::new(ServerConfig {
            data_file,
            ..Default::default()
        });
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.list()[0].name, "Tacos");
    }

    #[test]
    fn test_state_starts_empty_without_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let state = ServerState::new(ServerConfig {
            data_file: temp_dir.path().join("absent.json"),
            ..Default::default()
        });
        assert!(state.store.is_empty());
    }
}
