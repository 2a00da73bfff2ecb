//! Telemetry data models.
//!
//! The four event kinds a telemetry sink accepts: logs, metrics, traces and
//! errors.

pub mod error;
pub mod log;
pub mod metric;
pub mod trace;

pub use error::{ErrorEvent, ErrorEventValidationError};
pub use log::{LogEntry, LogLevel, LogValidationError};
pub use metric::{MetricEvent, MetricValidationError};
pub use trace::{TraceRecord, TraceValidationError};
