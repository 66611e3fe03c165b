//! Clinic site server

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use clinic_server::{config::ServerConfig, serve};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,clinic_server=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    serve(config).await
}
