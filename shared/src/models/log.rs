//! Log event model.
//!
//! A `LogEntry` is the structured log line the instrumented operation and the
//! HTTP handlers hand to a telemetry sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Detailed debug information.
    Trace,
    /// Debug information.
    Debug,
    /// Informational messages.
    #[default]
    Info,
    /// Warning conditions.
    Warn,
    /// Error conditions.
    Error,
    /// Critical/fatal conditions.
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

/// A single structured log event.
///
/// # Example
///
/// ```
/// use shared::models::{LogEntry, LogLevel};
///
/// let log = LogEntry::new(LogLevel::Info, "Subtraction performed", "subtraction-service")
///     .with_attribute("first_number", 10.0)
///     .with_attribute("second_number", 3.0)
///     .with_attribute("result", 7.0);
///
/// assert!(log.validate_entry().is_ok());
/// assert_eq!(log.attributes["result"], 7.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogEntry {
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,

    /// Severity level.
    #[serde(default)]
    pub level: LogLevel,

    /// Human-readable message.
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,

    /// Service that produced the entry.
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service: String,

    /// Structured key-value attributes.
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    /// Trace this entry belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<Uuid>,

    /// Span this entry belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_id: Option<Uuid>,
}

/// Errors that can occur during log entry validation.
#[derive(Debug, Error)]
pub enum LogValidationError {
    /// The log message is empty.
    #[error("Log message cannot be empty")]
    EmptyMessage,

    /// The service name is empty.
    #[error("Service name cannot be empty")]
    EmptyService,

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl LogEntry {
    /// Creates a new log entry stamped with the current time.
    #[must_use]
    pub fn new(level: LogLevel, message: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            service: service.into(),
            attributes: HashMap::new(),
            trace_id: None,
            span_id: None,
        }
    }

    /// Adds an attribute. Values that fail to serialize are stored as `null`.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.attributes.insert(
            key.into(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
        self
    }

    /// Correlates the entry with a trace and span.
    #[must_use]
    pub fn with_trace_context(mut self, trace_id: Uuid, span_id: Uuid) -> Self {
        self.trace_id = Some(trace_id);
        self.span_id = Some(span_id);
        self
    }

    /// Validates the log entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the message or the service name is empty.
    pub fn validate_entry(&self) -> Result<(), LogValidationError> {
        if self.message.is_empty() {
            return Err(LogValidationError::EmptyMessage);
        }
        if self.service.is_empty() {
            return Err(LogValidationError::EmptyService);
        }
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_new() {
        let log = LogEntry::new(LogLevel::Info, "Test message", "test-service");

        assert_eq!(log.level, LogLevel::Info);
        assert_eq!(log.message, "Test message");
        assert_eq!(log.service, "test-service");
        assert!(log.attributes.is_empty());
        assert!(log.trace_id.is_none());
        assert!(log.span_id.is_none());
    }

    #[test]
    fn test_log_entry_with_trace_context() {
        let trace_id = Uuid::new_v4();
        let span_id = Uuid::new_v4();
        let log = LogEntry::new(LogLevel::Info, "Traced", "service")
            .with_trace_context(trace_id, span_id);

        assert_eq!(log.trace_id, Some(trace_id));
        assert_eq!(log.span_id, Some(span_id));
    }

    #[test]
    fn test_log_entry_serialization_skips_missing_ids() {
        let log = LogEntry::new(LogLevel::Error, "Something failed", "api")
            .with_attribute("first_number", 1.5);

        let json = serde_json::to_value(&log).unwrap();

        assert_eq!(json["level"], "error");
        assert_eq!(json["attributes"]["first_number"], json!(1.5));
        assert!(json.get("trace_id").is_none());
        assert!(json.get("span_id").is_none());
    }

    #[test]
    fn test_log_entry_deserialization_defaults() {
        let json = r#"{
            "timestamp": "2024-01-15T10:30:00Z",
            "message": "Simple log",
            "service": "test"
        }"#;

        let log: LogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(log.level, LogLevel::Info);
        assert!(log.attributes.is_empty());
    }

    #[test]
    fn test_log_entry_validation_empty_message() {
        let log = LogEntry::new(LogLevel::Info, "", "service");
        assert!(matches!(
            log.validate_entry(),
            Err(LogValidationError::EmptyMessage)
        ));
    }

    #[test]
    fn test_log_entry_validation_empty_service() {
        let log = LogEntry::new(LogLevel::Info, "message", "");
        assert!(matches!(
            log.validate_entry(),
            Err(LogValidationError::EmptyService)
        ));
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Fatal.to_string(), "fatal");
    }
}
