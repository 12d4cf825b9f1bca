use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use tsgraph_core::app_state::build_app_state;
use tsgraph_core::config::AppConfig;
use tsgraph_core::core::client::telemetry_client::TelemetryClient;
use tsgraph_core::core::logging::init_tracing;
use tsgraph_core::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _guard = init_tracing(&config.log_dir);

    let client = Arc::new(TelemetryClient::connect(&config)?);
    let app = app_router().with_state(build_app_state(client.clone()));

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!(
        addr = %config.listen_addr,
        backend = %config.backend_url,
        pool_size = config.pool_size,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    client.pool().close();
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
