// src/server/config.rs
//! Configuration file parsing for the recipe server
//!
//! Supports an optional TOML file with two sections:
//! - [server] - Bind address, CORS
//! - [storage] - Seed file location
//!
//! Every key has a default, so an empty file is a valid configuration.

use crate::server::ServerConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Attach a permissive CORS layer
    #[serde(default = "default_true")]
    pub cors: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors: true,
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_true() -> bool {
    true
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// JSON array of recipes loaded once at startup
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from(crate::store::DEFAULT_DATA_FILE)
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|_| {
            Error::InvalidConfig(format!("Invalid server.bind address: {}", self.server.bind))
        })
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            data_file: self.storage.data_file.clone(),
            enable_cors: self.server.cors,
        })
    }
}
