mod file_config;

pub use file_config::FileConfig;

use crate::server::{
    ServerConfig, DEFAULT_MAX_REQUEST_BYTES, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_request_bytes: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            data_dir: PathBuf::from("data"),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub max_request_bytes: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.data_dir.clone());
        if data_dir.exists() && !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let host = file.host.unwrap_or_else(|| cli.host.clone());
        if host.trim().is_empty() {
            bail!("host must not be empty");
        }

        let port = file.port.unwrap_or(cli.port);

        let request_timeout_secs = file
            .request_timeout_secs
            .unwrap_or(cli.request_timeout_secs);
        if request_timeout_secs == 0 {
            bail!("request_timeout_secs must be greater than 0");
        }

        let max_request_bytes = file.max_request_bytes.unwrap_or(cli.max_request_bytes);
        if max_request_bytes == 0 {
            bail!("max_request_bytes must be greater than 0");
        }

        Ok(Self {
            data_dir,
            host,
            port,
            request_timeout_secs,
            max_request_bytes,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_request_bytes: self.max_request_bytes,
        }
    }
}
