//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::operation::InstrumentedOperation;
use shared::telemetry::{InMemoryTelemetrySink, TelemetrySink, TracingTelemetrySink};
use std::sync::Arc;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The telemetry sink every handler emits to.
    telemetry: Arc<dyn TelemetrySink>,
    /// The instrumented subtraction, bound to `telemetry`.
    subtraction: InstrumentedOperation,
}

impl AppState {
    /// Creates a new application state emitting to the given sink.
    pub fn new(telemetry: Arc<dyn TelemetrySink>) -> Self {
        let subtraction = InstrumentedOperation::subtraction(Arc::clone(&telemetry));
        Self {
            telemetry,
            subtraction,
        }
    }

    /// Creates a state that forwards telemetry to the tracing subscriber.
    #[must_use]
    pub fn with_tracing_sink() -> Self {
        Self::new(Arc::new(TracingTelemetrySink::new()))
    }

    /// Creates a state backed by an in-memory sink, returning the sink too so
    /// callers can inspect what was emitted.
    #[must_use]
    pub fn with_in_memory_sink() -> (Self, Arc<InMemoryTelemetrySink>) {
        let sink = InMemoryTelemetrySink::new_shared();
        (Self::new(sink.clone()), sink)
    }

    /// Returns a reference to the telemetry sink.
    #[must_use]
    pub fn telemetry(&self) -> &dyn TelemetrySink {
        self.telemetry.as_ref()
    }

    /// Returns the instrumented subtraction.
    #[must_use]
    pub fn subtraction(&self) -> &InstrumentedOperation {
        &self.subtraction
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("subtraction", &self.subtraction)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_tracing_sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MetricEvent;

    #[test]
    fn test_subtraction_emits_to_state_sink() {
        let (state, sink) = AppState::with_in_memory_sink();

        assert_eq!(state.subtraction().execute(10.0, 3.0).unwrap(), 7.0);
        assert_eq!(sink.trace_count().unwrap(), 1);
    }

    #[test]
    fn test_app_state_is_clone() {
        let (state, sink) = AppState::with_in_memory_sink();
        let state2 = state.clone();

        state2
            .telemetry()
            .metric(MetricEvent::new("health_check"))
            .unwrap();

        assert_eq!(sink.metric_count().unwrap(), 1);
    }
}
