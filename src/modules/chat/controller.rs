use axum::{extract::rejection::JsonRejection, extract::State, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::modules::chat::schema::{ChatRequest, ChatResponse};
use crate::services::prompt::ChatPrompt;
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mut prompt = ChatPrompt::new(payload.message);
    if let Some(context) = &payload.context {
        prompt = prompt.with_context(context);
    }

    let result = state.llm.generate(&prompt.render()).await.map_err(|e| {
        tracing::error!(model = state.llm.model(), error = %e, "language model call failed");
        ApiError::Upstream(e.to_string())
    })?;

    if let Some(usage) = &result.usage {
        tracing::debug!(total_tokens = usage.total_tokens, "chat completed");
    }

    Ok(Json(ChatResponse {
        response: result.text.trim().to_string(),
    }))
}
