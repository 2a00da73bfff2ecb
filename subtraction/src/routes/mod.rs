//! API route definitions.

mod health;
mod subtraction;

pub use health::{health_routes, HealthState, HealthStatus};
pub use subtraction::{subtraction_routes, OperationResult, SubtractionParams};
