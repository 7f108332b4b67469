use anyhow::{Context, Result};
use starter_kit::api::{create_inference_router, serve, InferenceState};
use starter_kit::config::{AppConfig, ServiceKind};
use starter_kit::model::LinearModel;
use starter_kit::telemetry::init_tracing;

const SERVICE: ServiceKind = ServiceKind::Inference;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load(SERVICE).context("failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!(
        title = SERVICE.title(),
        version = env!("CARGO_PKG_VERSION"),
        cors = config.cors.enabled,
        "Starting service"
    );

    let model = LinearModel::placeholder(config.model.seed);
    tracing::info!(
        in_features = model.in_features(),
        out_features = model.out_features(),
        seeded = config.model.seed.is_some(),
        "Model initialised"
    );

    let router = create_inference_router(InferenceState::new(model), &config.cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    serve(listener, router).await?;

    Ok(())
}
