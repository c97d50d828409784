use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::modules::prediction::schema::PredictionRequest;
use crate::services::classifier::Label;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection Error: {0}")]
    Connection(#[from] reqwest::Error),
    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Chatbot Error {status}: {body}")]
    Chatbot { status: u16, body: String },
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn predict(&self, input: &PredictionRequest) -> Result<Label, ClientError>;

    async fn chat(&self, message: &str, context: &Map<String, Value>) -> Result<String, ClientError>;
}

/// HTTP client for the prediction/chat API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B: Serialize + ?Sized + Sync>(&self, path: &str, body: &B) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn predict(&self, input: &PredictionRequest) -> Result<Label, ClientError> {
        let result = self.post_json("/predict", input).await?;
        Ok(result
            .get("prediction")
            .cloned()
            .unwrap_or_else(|| Value::String("Unknown".to_string())))
    }

    async fn chat(&self, message: &str, context: &Map<String, Value>) -> Result<String, ClientError> {
        let body = json!({ "message": message, "context": context });
        let result = self.post_json("/chat", &body).await.map_err(|e| match e {
            ClientError::Api { status, body } => ClientError::Chatbot { status, body },
            other => other,
        })?;
        Ok(result
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or("No reply")
            .to_string())
    }
}
