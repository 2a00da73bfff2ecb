//! Subtraction Service
//!
//! A single-operation HTTP service: `GET /?first_number=&second_number=`
//! returns the difference of two floats, computed through an instrumented
//! operation that emits a trace, a metric and a log entry per call.
//! `GET /health` reports liveness.
//!
//! # Example
//!
//! ```no_run
//! use subtraction::run_server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     run_server().await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod routes;
mod state;

pub use error::{ApiError, INTERNAL_SERVER_ERROR_DETAIL};
pub use routes::{HealthState, HealthStatus, OperationResult, SubtractionParams};
pub use state::AppState;

use anyhow::Result;
use axum::Router;
use shared::config::ServiceConfig;
use shared::http::shutdown_signal;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Environment variable prefix for this service's configuration.
pub const ENV_PREFIX: &str = "SUBTRACTION";

/// Port used when `SUBTRACTION_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Loads this service's configuration from the environment.
///
/// # Errors
///
/// Returns an error if a configured value cannot be parsed.
pub fn load_config() -> Result<ServiceConfig> {
    ServiceConfig::from_env(ENV_PREFIX, DEFAULT_PORT)
}

/// Runs the subtraction service with configuration from the environment and
/// telemetry forwarded to the tracing subscriber.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The server fails to bind to the configured address
/// - A fatal error occurs during operation
pub async fn run_server() -> Result<()> {
    let config = load_config()?;
    run_server_with_config(config, AppState::with_tracing_sink()).await
}

/// Runs the subtraction service with the provided configuration and state.
///
/// # Errors
///
/// Returns an error if:
/// - The configured address is invalid or cannot be bound
/// - A fatal error occurs during operation
pub async fn run_server_with_config(config: ServiceConfig, state: AppState) -> Result<()> {
    let addr = config.socket_addr()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Subtraction service starting"
    );

    let app = create_router(state);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Creates the main application router with all routes and middleware.
///
/// This function is public to allow testing the router without starting a full server.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes(state.clone()))
        .merge(routes::subtraction_routes(state))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_returns_json() {
        let (state, _sink) = AppState::with_in_memory_sink();

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok());
        assert!(content_type.is_some_and(|ct| ct.contains("application/json")));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (state, _sink) = AppState::with_in_memory_sink();

        let response = create_router(state)
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
