//! landing_zone_server — serves the landing zone function over HTTP.
//!
//! Reads config from env vars (see `config`), optionally from a `.env` file.

use std::sync::Arc;

use anyhow::{Context, Result};
use landing_zone_core::{LandingZoneFunction, PolicyMatrix};
use landing_zone_server::config::ServerConfig;
use landing_zone_server::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,landing_zone_server=debug".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Built once, read-only for the life of the process.
    let matrix = Arc::new(PolicyMatrix::builtin());
    for entry in matrix.entries() {
        tracing::debug!("policy: {} → {}", entry.environment, entry.tiers.join(", "));
    }

    let function = Arc::new(LandingZoneFunction::new(matrix).with_ttl(config.response_ttl));
    let app = build_router(function);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!(
        "landing_zone_server listening on {} (ttl={:?})",
        config.bind_addr,
        config.response_ttl
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("landing_zone_server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
