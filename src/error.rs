// src/error.rs
use std::net::SocketAddr;

use thiserror::Error;

// --- Error types for startup ---

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("HELLO_API_HOST must be a valid IP address, got '{value}': {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("HELLO_API_PORT must be a valid port number, got '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("HELLO_API_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{value}': {source}")]
    InvalidTimeout {
        value: String,
        source: std::num::ParseIntError,
    },
}

#[derive(Error, Debug)]
pub enum ServerError {
    /// The listener could not be bound. Not retried.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
