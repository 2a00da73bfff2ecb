//! Shared library for the arithmetic services.
//!
//! # Modules
//!
//! - [`models`] - Telemetry event models (logs, metrics, traces, errors)
//! - [`telemetry`] - The `TelemetrySink` trait and its implementations
//! - [`operation`] - Arithmetic wrapped with timing and telemetry emission
//! - [`config`] - Environment-based service configuration
//! - [`logging`] - Tracing subscriber setup
//! - [`http`] - Query extraction and shutdown handling for the axum services
//!
//! # Example
//!
//! ```
//! use shared::operation::InstrumentedOperation;
//! use shared::telemetry::InMemoryTelemetrySink;
//!
//! let sink = InMemoryTelemetrySink::new_shared();
//! let subtraction = InstrumentedOperation::subtraction(sink.clone());
//!
//! assert_eq!(subtraction.execute(-10.0, -5.0).unwrap(), -5.0);
//! assert_eq!(sink.traces().unwrap()[0].operation, "subtraction");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod http;
pub mod logging;
pub mod models;
pub mod operation;
pub mod telemetry;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
pub use uuid;
