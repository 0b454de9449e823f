//! Server configuration from the environment

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: PathBuf,
    pub database_path: String,
    pub max_connections: u32,
    pub request_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `MARQUEE_*` variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("MARQUEE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let database_path = lookup("MARQUEE_DATABASE_PATH").unwrap_or_else(|| {
            data_dir.join("marquee.db").to_string_lossy().to_string()
        });

        let bind_address =
            lookup("MARQUEE_BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let max_connections = match lookup("MARQUEE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid MARQUEE_MAX_CONNECTIONS: {}", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            anyhow::bail!("MARQUEE_MAX_CONNECTIONS must be at least 1");
        }

        let timeout_secs = match lookup("MARQUEE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid MARQUEE_REQUEST_TIMEOUT_SECS: {}", raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let log_file = lookup("MARQUEE_LOG_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            bind_address,
            data_dir,
            database_path,
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
            log_file,
        };
        info!(
            "Config loaded: bind={}, db={}",
            config.bind_address, config.database_path
        );
        Ok(config)
    }
}
