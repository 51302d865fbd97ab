// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::{ConfigError, ServerError};
