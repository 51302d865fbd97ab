use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

pub const GREETING_MESSAGE: &str = "Hello from Go!";

// JSON body returned by the hello endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

impl GreetingResponse {
    pub fn new() -> Self {
        Self {
            message: GREETING_MESSAGE,
        }
    }
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self::new()
    }
}

// The handler for /api/hello. Accepts any method and never reads the request body.
pub async fn hello_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(GreetingResponse::new()))
}
