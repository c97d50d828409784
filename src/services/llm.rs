use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub usage: Option<UsageInfo>,
}

/// A hosted text-generation model that turns one prompt into one reply.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<LlmResponse, LlmError>;
}

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Like `new`, but refuses an empty credential.
    pub fn with_required_key(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        Ok(Self::new(api_key, base_url, model))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LanguageModel for LlmClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling language model");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(LlmError::ApiError(error_response.error.message));
            }
            return Err(LlmError::ApiError(error_text));
        }

        let generated: GenerateResponse = response.json().await?;

        let text = generated
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect::<String>())
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let usage = generated.usage_metadata.map(|u| UsageInfo {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });

        Ok(LlmResponse { text, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = LlmClient::new("key", "http://localhost:9999/v1beta/", "gemini-1.5-flash");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn empty_key_is_rejected_when_required() {
        let result = LlmClient::with_required_key("  ", DEFAULT_BASE_URL, "gemini-1.5-flash");
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn parses_candidate_text_and_usage() {
        let body = r#"{
            "candidates": [{"content": {"parts": [{"text": "Hello"}, {"text": " there"}], "role": "model"}}],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6}
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let parts = &parsed.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts.iter().map(|p| p.text.as_str()).collect::<String>(), "Hello there");
        assert_eq!(parsed.usage_metadata.unwrap().total_token_count, 6);
    }
}
