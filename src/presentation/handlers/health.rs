use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::HealthStatus;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub quality: String,
    pub cost: String,
}

impl From<HealthStatus> for HealthResponse {
    fn from(health: HealthStatus) -> Self {
        Self {
            status: health.status.to_string(),
            model: health.model,
            quality: health.quality.to_string(),
            cost: health.cost.to_string(),
        }
    }
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthStatus::for_model(state.transcription_service.model_id());
    (StatusCode::OK, Json(HealthResponse::from(health)))
}
