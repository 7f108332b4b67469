//! HTTP API for both services

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CorsSection;

pub mod handlers;
pub mod state;
pub mod validation;

pub use state::InferenceState;
pub use validation::ValidatedJson;

/// Router for the basic backend: `GET /` and `GET /health`.
pub fn create_backend_router(cors: &CorsSection) -> Router {
    let router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    apply_layers(router, cors)
}

/// Router for the inference backend: `POST /predict` and `GET /health`.
pub fn create_inference_router(state: InferenceState, cors: &CorsSection) -> Router {
    let router = Router::new()
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::inference_health))
        .with_state(state);

    apply_layers(router, cors)
}

/// CORS policy allowing every origin, method and header with credentials.
///
/// Wildcards cannot be combined with credentials, so the request's own
/// origin, method and headers are mirrored back instead.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn apply_layers(router: Router, cors: &CorsSection) -> Router {
    let router = router.layer(TraceLayer::new_for_http());
    if cors.enabled {
        router.layer(permissive_cors())
    } else {
        router
    }
}

/// Serve `router` on `listener` until Ctrl-C is received.
pub async fn serve(listener: TcpListener, router: Router) -> crate::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
