// src/config.rs

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Overrides are opt-in: only variables carrying this prefix are read.
pub const ENV_PREFIX: &str = "HELLO_API_";

// Server configuration, loaded once at startup. Every field has a default, so
// an environment without HELLO_API_* variables yields a server on 0.0.0.0:8080.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    // Server settings
    pub host: IpAddr,
    pub port: u16,

    /// Upper bound on the time spent serving a single request.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// The address the listener binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Loads `HELLO_API_*` overrides from the process environment.
    /// Unprefixed names such as `PORT` are never consulted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup of full variable names.
    /// Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let lookup = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(value) = lookup("HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost { value, source })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs: u64 = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidTimeout { value, source })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
