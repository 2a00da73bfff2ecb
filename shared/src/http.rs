//! HTTP glue shared by the services.
//!
//! [`QueryParams`] is a drop-in replacement for `axum::extract::Query` that
//! rejects malformed query strings with `422 Unprocessable Entity` and a
//! `{"detail": "..."}` body instead of axum's plain-text `400`.

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

/// Body of every error response the services return.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// What went wrong, safe to show to the caller.
    pub detail: String,
}

impl ErrorDetail {
    /// Creates a new error body.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Query-string extractor with `422` rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

/// Rejection produced when the query string does not deserialize.
#[derive(Debug)]
pub struct QueryRejection {
    detail: String,
}

impl QueryRejection {
    /// The client-facing description of the failure.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl IntoResponse for QueryRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail::new(self.detail)),
        )
            .into_response()
    }
}

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = QueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected query string");
                Err(QueryRejection {
                    detail: rejection.body_text(),
                })
            }
        }
    }
}

/// Waits for a shutdown signal (SIGTERM or SIGINT).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::{routing::get, Router};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default)]
        value: i64,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|QueryParams(p): QueryParams<Params>| async move { Json(p.value) }),
        )
    }

    async fn get_uri(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_query_params_extracts_values() {
        let (status, body) = get_uri("/?value=42").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, 42);
    }

    #[tokio::test]
    async fn test_query_params_defaults() {
        let (status, body) = get_uri("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, 0);
    }

    #[tokio::test]
    async fn test_query_params_rejects_with_422() {
        let (status, body) = get_uri("/?value=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }
}
