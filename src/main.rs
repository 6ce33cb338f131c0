//! # Backend Service
//!
//! Thin entry point: load the environment, read configuration, and hand off
//! to the server module.

use health_system_api::{server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env, if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    server::start_server(config).await?;
    Ok(())
}
