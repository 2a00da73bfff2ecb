//! API error type.
//!
//! Every failure leaving a handler goes through [`ApiError`], which decides
//! the status code and keeps internal error text out of the response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::http::ErrorDetail;
use shared::operation::OperationError;
use thiserror::Error;

/// Detail returned for every server-side failure.
pub const INTERNAL_SERVER_ERROR_DETAIL: &str = "Internal server error";

/// Errors returned by the subtraction service handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter parsed but is NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFiniteParameter(&'static str),

    /// The instrumented operation failed.
    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NonFiniteParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            Self::NonFiniteParameter(_) => self.to_string(),
            Self::Operation(_) => INTERNAL_SERVER_ERROR_DETAIL.to_string(),
        };
        (status, Json(ErrorDetail::new(detail))).into_response()
    }
}
