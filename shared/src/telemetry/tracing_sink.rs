//! Telemetry sink that forwards events to the `tracing` subscriber.

use super::{SinkError, TelemetrySink};
use crate::models::{ErrorEvent, LogEntry, LogLevel, MetricEvent, TraceRecord};
use serde::Serialize;

/// Production sink: every event becomes a structured `tracing` event under
/// the `telemetry` target, so the installed subscriber (pretty or JSON)
/// decides where it ends up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TracingTelemetrySink {
    /// Creates a new tracing-backed sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn to_json(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl TelemetrySink for TracingTelemetrySink {
    fn log(&self, entry: LogEntry) -> Result<(), SinkError> {
        entry.validate_entry()?;

        let attributes = to_json(&entry.attributes);
        let trace_id = entry.trace_id.map(|id| id.to_string());
        let span_id = entry.span_id.map(|id| id.to_string());

        macro_rules! emit {
            ($level:ident) => {
                tracing::$level!(
                    target: "telemetry",
                    kind = "log",
                    service = %entry.service,
                    trace_id = trace_id.as_deref(),
                    span_id = span_id.as_deref(),
                    attributes = %attributes,
                    "{}",
                    entry.message
                )
            };
        }

        match entry.level {
            LogLevel::Trace => emit!(trace),
            LogLevel::Debug => emit!(debug),
            LogLevel::Info => emit!(info),
            LogLevel::Warn => emit!(warn),
            LogLevel::Error | LogLevel::Fatal => emit!(error),
        }
        Ok(())
    }

    fn metric(&self, event: MetricEvent) -> Result<(), SinkError> {
        event.validate_event()?;
        tracing::info!(
            target: "telemetry",
            kind = "metric",
            metric = %event.name,
            fields = %to_json(&event.fields),
            "metric"
        );
        Ok(())
    }

    fn trace(&self, record: TraceRecord) -> Result<(), SinkError> {
        record.validate_record()?;
        tracing::info!(
            target: "telemetry",
            kind = "trace",
            trace_id = %record.trace_id,
            span_id = %record.span_id,
            operation = %record.operation,
            service = %record.service,
            duration_ms = record.duration_ms,
            metadata = %to_json(&record.metadata),
            "trace"
        );
        Ok(())
    }

    fn error(&self, event: ErrorEvent) -> Result<(), SinkError> {
        event.validate_event()?;
        tracing::error!(
            target: "telemetry",
            kind = "error",
            service = %event.service,
            error = %event.error,
            context = %to_json(&event.context),
            "error"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_accepts_valid_events() {
        let sink = TracingTelemetrySink::new();

        assert_ok!(sink.log(LogEntry::new(LogLevel::Fatal, "down", "svc")));
        assert_ok!(sink.metric(MetricEvent::new("operation").with_field("success", true)));
        assert_ok!(sink.trace(TraceRecord::new("subtraction", "svc").with_duration_ms(0.1)));
        assert_ok!(sink.error(ErrorEvent::new(&"boom", "svc")));
    }

    #[test]
    fn test_rejects_invalid_events() {
        let sink = TracingTelemetrySink::new();

        assert_err!(sink.trace(TraceRecord::new("subtraction", "").with_duration_ms(0.1)));
        assert_err!(sink.metric(MetricEvent::new("")));
    }
}
