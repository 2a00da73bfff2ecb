//! Subtraction endpoint.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use shared::http::QueryParams;
use shared::models::{LogEntry, LogLevel};
use shared::operation::{SUBTRACTION_OPERATION, SUBTRACTION_SERVICE};
use shared::telemetry::report_sink_failure;

/// Query parameters for the subtraction endpoint. Both default to 0.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SubtractionParams {
    /// Minuend.
    pub first_number: f64,
    /// Subtrahend.
    pub second_number: f64,
}

impl SubtractionParams {
    fn ensure_finite(&self) -> Result<(), ApiError> {
        if !self.first_number.is_finite() {
            return Err(ApiError::NonFiniteParameter("first_number"));
        }
        if !self.second_number.is_finite() {
            return Err(ApiError::NonFiniteParameter("second_number"));
        }
        Ok(())
    }
}

/// Response body of a successful subtraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationResult {
    /// `first_number - second_number`.
    pub result: f64,
    /// Always `"subtraction"`.
    pub operation: String,
    /// Echo of the minuend.
    pub first_number: f64,
    /// Echo of the subtrahend.
    pub second_number: f64,
}

/// Creates the subtraction routes.
pub fn subtraction_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(subtract))
        .with_state(state)
}

async fn subtract(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SubtractionParams>,
) -> Result<Json<OperationResult>, ApiError> {
    params.ensure_finite()?;

    let result = state
        .subtraction()
        .execute(params.first_number, params.second_number)
        .map_err(|e| {
            tracing::error!(
                first_number = params.first_number,
                second_number = params.second_number,
                error = %e,
                "Subtraction failed"
            );
            report_sink_failure(
                "log",
                state.telemetry().log(
                    LogEntry::new(LogLevel::Error, "Subtraction failed", SUBTRACTION_SERVICE)
                        .with_attribute("error", e.to_string()),
                ),
            );
            ApiError::from(e)
        })?;

    Ok(Json(OperationResult {
        result,
        operation: SUBTRACTION_OPERATION.to_string(),
        first_number: params.first_number,
        second_number: params.second_number,
    }))
}
