//! # API Module
//!
//! HTTP route table for the service.
//!
//! ## Available Endpoints
//!
//! - `ANY /api/hello` - Returns `{"message":"Hello from Go!"}`
//!
//! Every other path falls through to axum's default `404 Not Found`.

use axum::{routing::any, Router};

pub mod hello;

pub const HELLO_PATH: &str = "/api/hello";

/// Builds the application router without middleware.
pub fn create_router() -> Router {
    Router::new().route(HELLO_PATH, any(hello::hello_handler))
}
