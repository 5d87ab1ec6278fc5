//! Environment-driven configuration.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use orderdesk_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "ORDERDESK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "ORDERDESK_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ORDERDESK_BIND_ADDR={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("ORDERDESK_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidLogFormat)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
