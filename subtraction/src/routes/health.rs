//! Health check endpoint.
//!
//! Provides a simple health check endpoint for load balancers and monitoring systems.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use shared::models::MetricEvent;
use shared::operation::SUBTRACTION_SERVICE;
use shared::telemetry::report_sink_failure;

/// Service liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    /// The service is reachable and serving requests.
    Healthy,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Service status (always "healthy" if reachable).
    pub status: HealthState,
    /// Service name.
    pub service: &'static str,
}

/// Creates the health check routes.
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

/// Reports liveness and records a `health_check` metric event.
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    report_sink_failure(
        "metric",
        state.telemetry().metric(
            MetricEvent::new("health_check")
                .with_field("health_check", 1)
                .with_field("service", SUBTRACTION_SERVICE)
                .with_field("status", "healthy"),
        ),
    );

    Json(HealthStatus {
        status: HealthState::Healthy,
        service: SUBTRACTION_SERVICE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn health_request() -> Request<Body> {
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check_body() {
        let (state, _sink) = AppState::with_in_memory_sink();

        let response = health_routes(state).oneshot(health_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            health,
            json!({"status": "healthy", "service": "subtraction-service"})
        );
    }

    #[tokio::test]
    async fn test_health_check_emits_metric() {
        let (state, sink) = AppState::with_in_memory_sink();

        health_routes(state).oneshot(health_request()).await.unwrap();

        let metrics = sink.metrics().unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].name, "health_check");
        assert_eq!(metrics[0].fields["health_check"], json!(1));
        assert_eq!(metrics[0].fields["service"], json!("subtraction-service"));
        assert_eq!(metrics[0].fields["status"], json!("healthy"));
        assert_eq!(sink.trace_count().unwrap(), 0);
    }
}
