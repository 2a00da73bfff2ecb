//! In-memory telemetry sink for development and testing.

use super::{SinkError, TelemetrySink};
use crate::models::{ErrorEvent, LogEntry, MetricEvent, TraceRecord};
use std::sync::{Arc, RwLock};

/// Telemetry sink that keeps every accepted event in memory.
///
/// Cloning is cheap and clones share the same buffers, so a test can hand one
/// clone to the service and inspect another.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTelemetrySink {
    logs: Arc<RwLock<Vec<LogEntry>>>,
    metrics: Arc<RwLock<Vec<MetricEvent>>>,
    traces: Arc<RwLock<Vec<TraceRecord>>>,
    errors: Arc<RwLock<Vec<ErrorEvent>>>,
}

fn push<T>(buffer: &RwLock<Vec<T>>, item: T) -> Result<(), SinkError> {
    buffer.write().map_err(|_| SinkError::LockError)?.push(item);
    Ok(())
}

fn snapshot<T: Clone>(buffer: &RwLock<Vec<T>>) -> Result<Vec<T>, SinkError> {
    Ok(buffer.read().map_err(|_| SinkError::LockError)?.clone())
}

fn len<T>(buffer: &RwLock<Vec<T>>) -> Result<usize, SinkError> {
    Ok(buffer.read().map_err(|_| SinkError::LockError)?.len())
}

impl InMemoryTelemetrySink {
    /// Creates a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty sink wrapped in an Arc.
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns a copy of all recorded log entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn logs(&self) -> Result<Vec<LogEntry>, SinkError> {
        snapshot(&self.logs)
    }

    /// Returns a copy of all recorded metric events.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn metrics(&self) -> Result<Vec<MetricEvent>, SinkError> {
        snapshot(&self.metrics)
    }

    /// Returns a copy of all recorded trace records.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn traces(&self) -> Result<Vec<TraceRecord>, SinkError> {
        snapshot(&self.traces)
    }

    /// Returns a copy of all recorded error events.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn errors(&self) -> Result<Vec<ErrorEvent>, SinkError> {
        snapshot(&self.errors)
    }

    /// Number of recorded log entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn log_count(&self) -> Result<usize, SinkError> {
        len(&self.logs)
    }

    /// Number of recorded metric events.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn metric_count(&self) -> Result<usize, SinkError> {
        len(&self.metrics)
    }

    /// Number of recorded trace records.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn trace_count(&self) -> Result<usize, SinkError> {
        len(&self.traces)
    }

    /// Number of recorded error events.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is poisoned.
    pub fn error_count(&self) -> Result<usize, SinkError> {
        len(&self.errors)
    }

    /// Drops every recorded event.
    ///
    /// # Errors
    ///
    /// Returns an error if any lock is poisoned.
    pub fn clear(&self) -> Result<(), SinkError> {
        self.logs.write().map_err(|_| SinkError::LockError)?.clear();
        self.metrics.write().map_err(|_| SinkError::LockError)?.clear();
        self.traces.write().map_err(|_| SinkError::LockError)?.clear();
        self.errors.write().map_err(|_| SinkError::LockError)?.clear();
        Ok(())
    }
}

impl TelemetrySink for InMemoryTelemetrySink {
    fn log(&self, entry: LogEntry) -> Result<(), SinkError> {
        entry.validate_entry()?;
        push(&self.logs, entry)
    }

    fn metric(&self, event: MetricEvent) -> Result<(), SinkError> {
        event.validate_event()?;
        push(&self.metrics, event)
    }

    fn trace(&self, record: TraceRecord) -> Result<(), SinkError> {
        record.validate_record()?;
        push(&self.traces, record)
    }

    fn error(&self, event: ErrorEvent) -> Result<(), SinkError> {
        event.validate_event()?;
        push(&self.errors, event)
    }
}
