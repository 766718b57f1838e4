//! HTTP server exposing `GET /?t=<ticker>` (also `/etfInfo?t=<ticker>`).
//!
//! Environment:
//! - `ETF_LISTEN`: bind address, default `0.0.0.0:8080`
//! - `ETF_BASE_PROFILE` / `ETF_BASE_FLOWS`: override the source base URLs
//! - `ETF_CHROME_PATH`: Chrome/Chromium executable
//! - `ETF_RENDER_TIMEOUT_SECS`: navigation and readiness timeout
//! - `RUST_LOG`: log filter, default `info`

use std::env;
use std::time::Duration;

use etf_snapshot::{ChromeRenderer, EtfClient, handler};
use tracing_subscriber::EnvFilter;
use url::Url;

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn build_client() -> Result<EtfClient, Box<dyn std::error::Error>> {
    let mut renderer = ChromeRenderer::builder();
    if let Some(path) = env_var("ETF_CHROME_PATH") {
        renderer = renderer.path(path);
    }
    if let Some(secs) = env_var("ETF_RENDER_TIMEOUT_SECS") {
        renderer = renderer.default_timeout(Duration::from_secs(secs.parse()?));
    }

    let mut builder = EtfClient::builder().renderer(renderer.build());
    if let Some(base) = env_var("ETF_BASE_PROFILE") {
        builder = builder.base_profile(Url::parse(&base)?);
    }
    if let Some(base) = env_var("ETF_BASE_FLOWS") {
        builder = builder.base_flows(Url::parse(&base)?);
    }
    Ok(builder.build()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = build_client()?;
    let addr = env_var("ETF_LISTEN").unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, ?client, "listening");

    axum::serve(listener, handler::router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
