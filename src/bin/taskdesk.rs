//! Runs the taskdesk HTTP server.
//!
//! Usage:
//!
//! ```text
//! taskdesk [--host <addr>] [--port <port>] [--log-filter <directive>]
//! ```
//!
//! Every flag can also be supplied through its `TASKDESK_*` environment
//! variable. `RUST_LOG`, when set, takes precedence over `--log-filter`.

use std::sync::Arc;

use clap::Parser;
use taskdesk::{
    app::in_memory_service,
    config::ServerConfig,
    http::router,
    task::adapters::memory::TaskStore,
    telemetry::{self, TelemetryError},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_filter)?;

    let service = in_memory_service(Arc::new(TaskStore::new()));
    let app = router(Arc::new(service));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "taskdesk listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("taskdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
