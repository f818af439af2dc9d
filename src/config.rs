// Runtime configuration, read once at startup.
//
// Variables
// - PORT (default 5000), HOST (default 0.0.0.0)
// - PORTAL_AUTH_TOKEN, required: the admin token the auth gate accepts.
// - PORTAL_DATA_FILE, optional: JSON file for durable records. Unset keeps records in memory.
// - RUST_LOG overrides DEFAULT_LOG_FILTER.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_FILTER: &str = "cng_portal=info,tower_http=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORTAL_AUTH_TOKEN must be set")]
    MissingAuthToken,

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub auth_token: String,
    pub data_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let server_port = match present("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
        };

        Ok(Config {
            server_host: present("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            auth_token: present("PORTAL_AUTH_TOKEN").ok_or(ConfigError::MissingAuthToken)?,
            data_file: present("PORTAL_DATA_FILE").map(PathBuf::from),
            log_filter: present("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
