use axum::{extract::State, Json};

use crate::modules::health::schema::HealthResponse;
use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model_loaded: state.classifier.is_some(),
    })
}
