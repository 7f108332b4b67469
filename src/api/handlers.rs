//! API handlers

use axum::{extract::State, Json};

use crate::api::{InferenceState, ValidatedJson};
use crate::model::RuntimeInfo;
use crate::types::{
    HealthResponse, InferenceHealthResponse, InferenceRequest, InferenceResponse, WelcomeResponse,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the FastAPI Backend";

/// Welcome message of the basic backend
pub async fn root() -> Json<WelcomeResponse> {
    tracing::info!("Root endpoint accessed");
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Liveness check of the basic backend
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Run the model on the request data.
///
/// Inference failures are reported in the body with HTTP 200; callers must
/// check `status`.
pub async fn predict(
    State(state): State<InferenceState>,
    ValidatedJson(request): ValidatedJson<InferenceRequest>,
) -> Json<InferenceResponse> {
    tracing::info!(data_length = request.data.len(), "Inference request received");

    match state.model.predict(&request.data) {
        Ok(prediction) => Json(InferenceResponse::success(prediction)),
        Err(err) => {
            tracing::error!(error = %err, details = ?err, "Inference failed");
            Json(InferenceResponse::error(err))
        }
    }
}

/// Health check with numeric runtime details
pub async fn inference_health() -> Json<InferenceHealthResponse> {
    Json(RuntimeInfo::detect().health())
}
