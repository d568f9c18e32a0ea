//! Configuration management for pawtrack.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `0.0.0.0`.
//! - `PORT` - Optional. Server port. Defaults to `3001`.
//! - `PAWTRACK_DATA_FILE` - Optional. JSON file holding all household data. Defaults to `./data.json`.
//! - `PAWTRACK_STATIC_DIR` - Optional. Built dashboard to serve for non-API paths.
//! - `PAWTRACK_BODY_LIMIT` - Optional. Maximum request body size in bytes. Defaults to 2 MB.
//! - `PAWTRACK_IN_MEMORY` - Optional. Keep data in memory only. Defaults to `false`.

use std::path::PathBuf;
use thiserror::Error;

use crate::util::env_var_bool;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DATA_FILE: &str = "./data.json";
/// Member photos travel inline as data URLs.
const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Household data file
    pub data_file: PathBuf,

    /// Directory with the built dashboard, if it should be served
    pub static_dir: Option<PathBuf>,

    /// Maximum accepted request body, in bytes
    pub body_limit: usize,

    /// Use a store that never touches disk
    pub in_memory: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or `PAWTRACK_BODY_LIMIT`
    /// is not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => parse_number("PORT", &raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let data_file = std::env::var("PAWTRACK_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let static_dir = std::env::var("PAWTRACK_STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let body_limit = match std::env::var("PAWTRACK_BODY_LIMIT") {
            Ok(raw) => parse_number("PAWTRACK_BODY_LIMIT", &raw)?,
            Err(_) => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            host,
            port,
            data_file,
            static_dir,
            body_limit,
            in_memory: env_var_bool("PAWTRACK_IN_MEMORY", false),
        })
    }

    /// Create a config with default values around a data file (useful for testing).
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file,
            static_dir: None,
            body_limit: DEFAULT_BODY_LIMIT,
            in_memory: false,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e)))
}
