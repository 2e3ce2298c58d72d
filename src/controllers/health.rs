use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// What readiness reports about the speech provider
#[derive(Debug, Clone)]
pub struct HealthState {
    pub provider: &'static str,
    pub model: String,
    pub provider_configured: bool,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    if state.provider_configured {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "tts": state.provider,
                "model": state.model,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "tts": "unconfigured",
                "model": state.model,
            })),
        )
    }
}
