//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the bind address.
pub const ADDR_ENV: &str = "TRAIN_BOOKING_ADDR";

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bind address could not be parsed
    #[error("invalid TRAIN_BOOKING_ADDR {value:?}: expected host:port")]
    InvalidAddr { value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new configuration with the given address.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Load configuration from the environment, falling back to defaults for
    /// unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_ENV) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
