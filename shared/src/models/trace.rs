//! Trace record model.
//!
//! One `TraceRecord` is produced per successful instrumented invocation. It
//! correlates the operation's duration and metadata under a fresh
//! trace/span identifier pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// A completed operation span handed to a telemetry sink.
///
/// # Example
///
/// ```
/// use shared::models::TraceRecord;
///
/// let record = TraceRecord::new("subtraction", "subtraction-service")
///     .with_duration_ms(0.25)
///     .with_metadata("first_number", 10.0)
///     .with_metadata("second_number", 3.0)
///     .with_metadata("result", 7.0);
///
/// assert!(record.validate_record().is_ok());
/// assert_ne!(record.trace_id, record.span_id);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TraceRecord {
    /// Trace identifier.
    pub trace_id: Uuid,

    /// Span identifier.
    pub span_id: Uuid,

    /// Name of the traced operation.
    #[validate(length(min = 1, message = "Operation name cannot be empty"))]
    pub operation: String,

    /// Service that executed the operation.
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service: String,

    /// Wall-clock time the operation started.
    pub start_time: DateTime<Utc>,

    /// Elapsed time in milliseconds.
    pub duration_ms: f64,

    /// Operation-specific metadata.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Errors that can occur during trace record validation.
#[derive(Debug, Error)]
pub enum TraceValidationError {
    /// The operation name is empty.
    #[error("Operation name cannot be empty")]
    EmptyOperation,

    /// The service name is empty.
    #[error("Service name cannot be empty")]
    EmptyService,

    /// The duration is negative, NaN or infinite.
    #[error("Duration must be a finite, non-negative number of milliseconds")]
    InvalidDuration,

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl TraceRecord {
    /// Creates a record with freshly generated v4 trace and span ids.
    #[must_use]
    pub fn new(operation: impl Into<String>, service: impl Into<String>) -> Self {
        Self::with_ids(Uuid::new_v4(), Uuid::new_v4(), operation, service)
    }

    /// Creates a record under an existing trace/span pair.
    #[must_use]
    pub fn with_ids(
        trace_id: Uuid,
        span_id: Uuid,
        operation: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            trace_id,
            span_id,
            operation: operation.into(),
            service: service.into(),
            start_time: Utc::now(),
            duration_ms: 0.0,
            metadata: HashMap::new(),
        }
    }

    /// Sets the start time.
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the elapsed duration.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.metadata.insert(
            key.into(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
        self
    }

    /// Validates the trace record.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The operation or service name is empty
    /// - The duration is negative or not finite
    pub fn validate_record(&self) -> Result<(), TraceValidationError> {
        if self.operation.is_empty() {
            return Err(TraceValidationError::EmptyOperation);
        }
        if self.service.is_empty() {
            return Err(TraceValidationError::EmptyService);
        }
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(TraceValidationError::InvalidDuration);
        }
        self.validate()?;
        Ok(())
    }
}
