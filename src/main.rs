//! Basic backend binary

use anyhow::Context;

use starter_kit::api::{create_backend_router, serve};
use starter_kit::config::{AppConfig, ServiceKind};
use starter_kit::telemetry::init_tracing;

const SERVICE: ServiceKind = ServiceKind::Backend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(SERVICE).context("failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!(
        title = SERVICE.title(),
        version = env!("CARGO_PKG_VERSION"),
        cors = config.cors.enabled,
        "Starting service"
    );

    let router = create_backend_router(&config.cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    serve(listener, router).await?;

    Ok(())
}
