// src/server.rs

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::{api::create_router, config::Config, error::ServerError};

/// Binds the listening socket. A failure here is fatal for the process.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the application on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, config: &Config) -> Result<(), ServerError> {
    let app = create_router()
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    let addr = listener.local_addr()?;
    info!("🚀 HTTP Server listening on {}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

pub async fn run(config: Config) -> Result<(), ServerError> {
    let listener = bind(config.socket_addr()).await?;
    serve(listener, &config).await
}
