use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use crate::controllers::{SearchProxy, YTMusicClient, YTMusicConfig};
use crate::routers::{app, cors_layer};
use crate::secrets::SECRET_MANAGER;
mod controllers;
mod errors;
mod models;
mod routers;
mod secrets;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        error!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // One authenticated client for the whole process
    let client = YTMusicClient::connect(YTMusicConfig::from_secrets(&SECRET_MANAGER))
        .await
        .context("Failed to open YouTube Music session")?;
    let proxy = SearchProxy::new(Arc::new(client));

    let cors = cors_layer(&SECRET_MANAGER.get("CORS_ALLOWED_ORIGINS"))
        .context("Invalid CORS_ALLOWED_ORIGINS")?;
    let app = app(proxy, cors);

    let port = SECRET_MANAGER.get("PORT");
    let backend_url = SECRET_MANAGER.get("BACKEND_URL");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("🎧 YTMusic search proxy listening on {}", backend_url);
    info!("🔎 Search endpoint: /ytmusic/search?q=...");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
