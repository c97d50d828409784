use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::modules::prediction::{
    model::FeatureRecord,
    schema::{PredictionRequest, PredictionResponse},
};
use crate::modules::user_data::crud::UserDataCrud;
use crate::AppState;

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let classifier = state.classifier.as_ref().ok_or(ApiError::ServiceUnavailable)?;

    let record = FeatureRecord::from(&payload);

    let prediction = classifier.predict(&record).map_err(|e| {
        tracing::error!(error = %e, "classifier call failed");
        ApiError::Prediction(e.to_string())
    })?;

    tracing::info!(prediction = %prediction, country = %record.country, "prediction served");

    UserDataCrud::new(&state.user_data)
        .save(record, prediction.clone())
        .await;

    Ok(Json(PredictionResponse { prediction }))
}
