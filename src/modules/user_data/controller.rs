use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::modules::user_data::{crud::UserDataCrud, model::UserSnapshot};
use crate::AppState;

pub async fn get_user_data(State(state): State<AppState>) -> Result<Json<UserSnapshot>, ApiError> {
    let snapshot = UserDataCrud::new(&state.user_data)
        .latest()
        .await
        .ok_or_else(|| ApiError::NotFound("No user data found".to_string()))?;

    tracing::debug!(recorded_at = %snapshot.recorded_at, "serving user data");

    Ok(Json(snapshot))
}
