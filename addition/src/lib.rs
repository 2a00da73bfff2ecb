//! Addition Service
//!
//! Serves `GET /?first_number=&second_number=` over two integers and returns
//! the bare numeric result. There is no telemetry beyond request tracing.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod routes;

pub use routes::{addition, AdditionParams};

use anyhow::Result;
use axum::Router;
use shared::config::ServiceConfig;
use shared::http::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Environment variable prefix for this service's configuration.
pub const ENV_PREFIX: &str = "ADDITION";

/// Port used when `ADDITION_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8081;

/// Loads this service's configuration from the environment.
///
/// # Errors
///
/// Returns an error if a configured value cannot be parsed.
pub fn load_config() -> Result<ServiceConfig> {
    ServiceConfig::from_env(ENV_PREFIX, DEFAULT_PORT)
}

/// Runs the addition service with the provided configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The configured address is invalid or cannot be bound
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: ServiceConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Addition service starting"
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the application router.
pub fn create_router() -> Router {
    Router::new()
        .merge(routes::addition_routes())
        .layer(TraceLayer::new_for_http())
}
