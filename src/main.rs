use anyhow::Context;
use tracing_subscriber::EnvFilter;

use casedesk_api::{config, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the config singleton is first touched
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("casedesk_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Casedesk API in {:?} mode", config.environment);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Casedesk API listening on http://{}", bind_addr);

    axum::serve(listener, routes::app())
        .await
        .context("server error")?;

    Ok(())
}
