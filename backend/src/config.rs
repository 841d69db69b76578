//! # Server Configuration
//!
//! Settings are resolved in three layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. a YAML file named by `SUBWAY_CONFIG`
//! 3. the `SUBWAY_DATABASE_URL` and `SUBWAY_BIND_ADDRESS` environment variables
//!
//! ```yaml
//! database_url: "sqlite:subway.db"
//! bind_address: "127.0.0.1:8080"
//! allowed_origins:
//!   - "http://localhost:8080"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tracing::info;

use crate::storage::connection::DEFAULT_DATABASE_URL;

pub const CONFIG_PATH_ENV: &str = "SUBWAY_CONFIG";
pub const DATABASE_URL_ENV: &str = "SUBWAY_DATABASE_URL";
pub const BIND_ADDRESS_ENV: &str = "SUBWAY_BIND_ADDRESS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            allowed_origins: vec!["http://localhost:8080".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        let file = std::env::var(CONFIG_PATH_ENV).ok();
        let database_url = std::env::var(DATABASE_URL_ENV).ok();
        let bind_address = std::env::var(BIND_ADDRESS_ENV).ok();

        Self::resolve(file.as_deref(), database_url, bind_address)
    }

    /// Read a YAML config file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ServerConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    fn resolve(
        file: Option<&str>,
        database_url: Option<String>,
        bind_address: Option<String>,
    ) -> Result<Self> {
        let mut config = match file {
            Some(path) => {
                info!("Loading config from {}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(url) = database_url {
            config.database_url = url;
        }
        if let Some(address) = bind_address {
            config.bind_address = address
                .parse()
                .with_context(|| format!("Invalid {}: {}", BIND_ADDRESS_ENV, address))?;
        }

        Ok(config)
    }
}
