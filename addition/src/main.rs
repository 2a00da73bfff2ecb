//! Addition Service Binary

#![deny(unsafe_code)]

use anyhow::Result;
use shared::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = addition::load_config()?;
    init_tracing(config.log_format);

    addition::run_server_with_config(config).await
}
