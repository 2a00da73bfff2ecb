//! Instrumented arithmetic operations.
//!
//! [`InstrumentedOperation`] wraps a binary computation on two floats with
//! timing, success logging and trace/metric emission, or error capture when
//! the computation fails. Every invocation emits either one trace record plus
//! one metric event, or one error event. Never both, never neither.

use crate::models::{ErrorEvent, LogEntry, LogLevel, MetricEvent, TraceRecord};
use crate::telemetry::{report_sink_failure, TelemetrySink};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use uuid::Uuid;

/// Service name reported by the subtraction operation.
pub const SUBTRACTION_SERVICE: &str = "subtraction-service";

/// Operation name reported by the subtraction operation.
pub const SUBTRACTION_OPERATION: &str = "subtraction";

/// Errors an instrumented computation can return.
#[derive(Debug, Error)]
pub enum OperationError {
    /// The computation produced NaN or an infinity.
    #[error("{operation} of {first} and {second} produced a non-finite result")]
    NonFiniteResult {
        /// Operation name.
        operation: &'static str,
        /// Left operand.
        first: f64,
        /// Right operand.
        second: f64,
    },

    /// Any other computation failure.
    #[error("Computation failed: {0}")]
    Computation(String),
}

/// A binary computation on two floats.
pub type Compute = fn(f64, f64) -> Result<f64, OperationError>;

/// `first - second`, rejecting results that overflow to infinity.
///
/// # Errors
///
/// Returns [`OperationError::NonFiniteResult`] if the difference is not finite.
pub fn subtract(first: f64, second: f64) -> Result<f64, OperationError> {
    let result = first - second;
    if result.is_finite() {
        Ok(result)
    } else {
        Err(OperationError::NonFiniteResult {
            operation: SUBTRACTION_OPERATION,
            first,
            second,
        })
    }
}

/// A computation bound to a telemetry sink.
///
/// # Example
///
/// ```
/// use shared::operation::InstrumentedOperation;
/// use shared::telemetry::InMemoryTelemetrySink;
///
/// let sink = InMemoryTelemetrySink::new_shared();
/// let op = InstrumentedOperation::subtraction(sink.clone());
///
/// assert_eq!(op.execute(10.0, 3.0).unwrap(), 7.0);
/// assert_eq!(sink.trace_count().unwrap(), 1);
/// assert_eq!(sink.metric_count().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct InstrumentedOperation {
    name: &'static str,
    service: &'static str,
    sink: Arc<dyn TelemetrySink>,
    compute: Compute,
}

impl std::fmt::Debug for InstrumentedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstrumentedOperation")
            .field("name", &self.name)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl InstrumentedOperation {
    /// Binds `compute` to `sink` under the given operation and service names.
    pub fn new(
        name: &'static str,
        service: &'static str,
        sink: Arc<dyn TelemetrySink>,
        compute: Compute,
    ) -> Self {
        Self {
            name,
            service,
            sink,
            compute,
        }
    }

    /// The instrumented subtraction used by the subtraction service.
    pub fn subtraction(sink: Arc<dyn TelemetrySink>) -> Self {
        Self::new(SUBTRACTION_OPERATION, SUBTRACTION_SERVICE, sink, subtract)
    }

    /// Operation name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the computation and emits its telemetry.
    ///
    /// # Errors
    ///
    /// Returns the computation's error unchanged, after it has been recorded
    /// as an error event.
    pub fn execute(&self, first: f64, second: f64) -> Result<f64, OperationError> {
        let trace_id = Uuid::new_v4();
        let span_id = Uuid::new_v4();

        let span = tracing::info_span!(
            "instrumented_operation",
            operation = self.name,
            %trace_id,
            %span_id
        );
        let _guard = span.enter();

        let start_time = Utc::now();
        let started = Instant::now();

        match (self.compute)(first, second) {
            Ok(result) => {
                report_sink_failure(
                    "log",
                    self.sink.log(
                        LogEntry::new(
                            LogLevel::Info,
                            format!("{} performed", self.name),
                            self.service,
                        )
                        .with_attribute("first_number", first)
                        .with_attribute("second_number", second)
                        .with_attribute("result", result)
                        .with_trace_context(trace_id, span_id),
                    ),
                );

                let duration_ms = elapsed_ms(started);

                report_sink_failure(
                    "trace",
                    self.sink.trace(
                        TraceRecord::with_ids(trace_id, span_id, self.name, self.service)
                            .with_start_time(start_time)
                            .with_duration_ms(duration_ms)
                            .with_metadata("first_number", first)
                            .with_metadata("second_number", second)
                            .with_metadata("result", result),
                    ),
                );

                report_sink_failure(
                    "metric",
                    self.sink.metric(
                        MetricEvent::new("operation")
                            .with_field("operation", self.name)
                            .with_field("success", true)
                            .with_field("response_time_ms", duration_ms),
                    ),
                );

                tracing::debug!(first, second, result, duration_ms, "Operation succeeded");
                Ok(result)
            }
            Err(e) => {
                let duration_ms = elapsed_ms(started);

                report_sink_failure(
                    "error",
                    self.sink.error(
                        ErrorEvent::new(&e, self.service)
                            .with_context("operation", self.name)
                            .with_context("first_number", first)
                            .with_context("second_number", second)
                            .with_context("duration_ms", duration_ms),
                    ),
                );

                tracing::debug!(first, second, duration_ms, error = %e, "Operation failed");
                Err(e)
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
