use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the HTTP handlers. Nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad input shape or range, rejected before any external call.
    #[error("{0}")]
    Validation(String),
    #[error("Model not available")]
    ServiceUnavailable,
    /// The classifier raised while predicting.
    #[error("{0}")]
    Prediction(String),
    /// The language model call failed.
    #[error("Language model call failed: {0}")]
    Upstream(String),
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Prediction(_) | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Prediction(_) | ApiError::NotFound(_) => json!({ "error": self.to_string() }),
            _ => json!({ "detail": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::ServiceUnavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::Prediction("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Upstream("timeout".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::NotFound("none".into()).status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_message_wraps_cause() {
        let err = ApiError::Upstream("quota exceeded".into());
        assert_eq!(err.to_string(), "Language model call failed: quota exceeded");
    }
}
