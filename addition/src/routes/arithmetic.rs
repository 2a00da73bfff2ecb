//! The addition endpoint.
//!
//! NOTE: the operation is named `addition` but returns
//! `first_number - second_number`. That is the behaviour clients of this
//! service currently get, so it is kept as is until the intended semantics
//! are confirmed.

use axum::{routing::get, Json, Router};
use serde::Deserialize;
use shared::http::QueryParams;

/// Query parameters for the addition endpoint. Both default to 0.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdditionParams {
    /// Left operand.
    pub first_number: i64,
    /// Right operand.
    pub second_number: i64,
}

/// Creates the addition routes.
pub fn addition_routes() -> Router {
    Router::new().route("/", get(handle_addition))
}

/// Computes `first_number - second_number`.
///
/// Widened to `i128` so no pair of `i64` inputs can overflow.
#[must_use]
pub fn addition(first_number: i64, second_number: i64) -> i128 {
    i128::from(first_number) - i128::from(second_number)
}

async fn handle_addition(QueryParams(params): QueryParams<AdditionParams>) -> Json<i128> {
    Json(addition(params.first_number, params.second_number))
}
