//! Error event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use validator::Validate;

/// A captured failure together with the context it happened in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ErrorEvent {
    /// When the failure was captured.
    pub timestamp: DateTime<Utc>,

    /// Rendered error.
    #[validate(length(min = 1, message = "Error text cannot be empty"))]
    pub error: String,

    /// Service that observed the failure.
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service: String,

    /// Context such as operation name, operands and elapsed time.
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

/// Errors that can occur during error event validation.
#[derive(Debug, Error)]
pub enum ErrorEventValidationError {
    /// The error text is empty.
    #[error("Error text cannot be empty")]
    EmptyError,

    /// Validation failed with details.
    #[error("Validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl ErrorEvent {
    /// Captures `error` using its `Display` rendering.
    #[must_use]
    pub fn new(error: &impl std::fmt::Display, service: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            error: error.to_string(),
            service: service.into(),
            context: HashMap::new(),
        }
    }

    /// Adds a context entry.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.context.insert(
            key.into(),
            serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
        );
        self
    }

    /// Validates the error event.
    ///
    /// # Errors
    ///
    /// Returns an error if the error text or service name is empty.
    pub fn validate_event(&self) -> Result<(), ErrorEventValidationError> {
        if self.error.is_empty() {
            return Err(ErrorEventValidationError::EmptyError);
        }
        self.validate()?;
        Ok(())
    }
}
