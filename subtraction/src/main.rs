//! Subtraction Service Binary
//!
//! Entry point for the instrumented subtraction HTTP service.

#![deny(unsafe_code)]

use anyhow::Result;
use shared::logging::init_tracing;
use subtraction::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = subtraction::load_config()?;
    init_tracing(config.log_format);

    subtraction::run_server_with_config(config, AppState::with_tracing_sink()).await
}
