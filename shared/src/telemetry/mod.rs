//! Telemetry sinks.
//!
//! The `TelemetrySink` trait is the single seam through which the services
//! emit structured logs, metrics, traces and errors. Sinks are constructed
//! explicitly and injected; nothing in this crate holds a global sink.

mod memory;
mod tracing_sink;

pub use memory::InMemoryTelemetrySink;
pub use tracing_sink::TracingTelemetrySink;

use crate::models::{
    ErrorEvent, ErrorEventValidationError, LogEntry, LogValidationError, MetricEvent,
    MetricValidationError, TraceRecord, TraceValidationError,
};
use thiserror::Error;

/// Errors that can occur while emitting telemetry.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to acquire a lock inside the sink.
    #[error("Failed to acquire lock on telemetry sink")]
    LockError,

    /// The event failed validation and was dropped.
    #[error("Invalid telemetry event: {0}")]
    InvalidEvent(String),
}

impl From<LogValidationError> for SinkError {
    fn from(e: LogValidationError) -> Self {
        Self::InvalidEvent(e.to_string())
    }
}

impl From<MetricValidationError> for SinkError {
    fn from(e: MetricValidationError) -> Self {
        Self::InvalidEvent(e.to_string())
    }
}

impl From<TraceValidationError> for SinkError {
    fn from(e: TraceValidationError) -> Self {
        Self::InvalidEvent(e.to_string())
    }
}

impl From<ErrorEventValidationError> for SinkError {
    fn from(e: ErrorEventValidationError) -> Self {
        Self::InvalidEvent(e.to_string())
    }
}

/// Destination for structured telemetry events.
///
/// Implementations must be thread-safe (Send + Sync): one sink instance is
/// shared by every in-flight request.
pub trait TelemetrySink: Send + Sync {
    /// Emits a log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is invalid or the sink cannot accept it.
    fn log(&self, entry: LogEntry) -> Result<(), SinkError>;

    /// Emits a metrics event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is invalid or the sink cannot accept it.
    fn metric(&self, event: MetricEvent) -> Result<(), SinkError>;

    /// Emits a trace record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or the sink cannot accept it.
    fn trace(&self, record: TraceRecord) -> Result<(), SinkError>;

    /// Emits an error event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is invalid or the sink cannot accept it.
    fn error(&self, event: ErrorEvent) -> Result<(), SinkError>;
}

/// Reports a failed emission without affecting the caller.
///
/// Telemetry is fire-and-forget: a sink that rejects an event is logged
/// through `tracing` and otherwise ignored.
pub fn report_sink_failure(kind: &'static str, result: Result<(), SinkError>) {
    if let Err(e) = result {
        tracing::warn!(kind, error = %e, "Failed to emit telemetry event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_convert_to_invalid_event() {
        let err: SinkError = TraceValidationError::InvalidDuration.into();
        assert!(matches!(err, SinkError::InvalidEvent(_)));
        assert!(err.to_string().contains("Duration"));
    }

    #[test]
    fn test_report_sink_failure_swallows_errors() {
        report_sink_failure("trace", Err(SinkError::LockError));
        report_sink_failure("trace", Ok(()));
    }
}
