//! Metric event model.
//!
//! Metric events are flat bags of named fields, e.g. the per-operation
//! `{operation, success, response_time_ms}` event or the health check's
//! `{health_check, service, status}` event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use validator::Validate;

/// A single metrics event.
///
/// # Example
///
/// ```
/// use shared::models::MetricEvent;
///
/// let event = MetricEvent::new("operation")
///     .with_field("operation", "subtraction")
///     .with_field("success", true)
///     .with_field("response_time_ms", 0.42);
///
/// assert!(event.validate_event().is_ok());
/// assert_eq!(event.fields["success"], true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MetricEvent {
    /// Event name used to group related measurements.
    #[validate(length(min = 1, message = "Metric name cannot be empty"))]
    pub name: String,

    /// When the measurement was taken.
    pub timestamp: DateTime<Utc>,

    /// Measured fields.
    #[serde(default)]
    pub fields: HashMap<String, serde_json::Value>,
}

/// Errors that can occur during metric event validation.
#[derive(Debug, Error)]
pub enum MetricValidationError {
    /// The metric name is empty.
    #[error("Metric name cannot be empty")]
    EmptyName,

    /// A numeric field is NaN or infinite.
    #[error("Metric field '{0}' is not a finite number")]
    NonFiniteField(String),

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl MetricEvent {
    /// Creates an empty metric event stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            fields: HashMap::new(),
        }
    }

    /// Adds a field.
    ///
    /// Non-finite floats serialize to `null`, which `validate_event` rejects.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.fields.insert(
            key.into(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
        self
    }

    /// Validates the metric event.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or any field is `null`.
    pub fn validate_event(&self) -> Result<(), MetricValidationError> {
        if self.name.is_empty() {
            return Err(MetricValidationError::EmptyName);
        }
        if let Some((key, _)) = self.fields.iter().find(|(_, v)| v.is_null()) {
            return Err(MetricValidationError::NonFiniteField(key.clone()));
        }
        self.validate()?;
        Ok(())
    }
}
