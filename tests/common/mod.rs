#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use mindscore::modules::prediction::model::FeatureRecord;
use mindscore::services::classifier::{Classifier, ClassifierError, Label};
use mindscore::services::llm::{LanguageModel, LlmError, LlmResponse};
use mindscore::AppState;

pub struct RecordingClassifier {
    pub label: Label,
    pub seen: Mutex<Vec<FeatureRecord>>,
}

impl RecordingClassifier {
    pub fn new(label: Label) -> Arc<Self> {
        Arc::new(Self {
            label,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<Label, ClassifierError> {
        self.seen.lock().unwrap().push(record.clone());
        Ok(self.label.clone())
    }
}

pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _record: &FeatureRecord) -> Result<Label, ClassifierError> {
        Err(ClassifierError::InvalidTree("could not convert string to float".to_string()))
    }
}

pub struct RecordingModel {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModel for RecordingModel {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(LlmResponse {
            text: self.reply.clone(),
            usage: None,
        })
    }
}

pub struct FailingModel;

#[async_trait]
impl LanguageModel for FailingModel {
    fn model(&self) -> &str {
        "fake-model"
    }

    async fn generate(&self, _prompt: &str) -> Result<LlmResponse, LlmError> {
        Err(LlmError::ApiError("quota exceeded".to_string()))
    }
}

pub fn state_with(classifier: Option<Arc<dyn Classifier>>, llm: Arc<dyn LanguageModel>) -> AppState {
    AppState::new(classifier, llm)
}

pub fn valid_request() -> Value {
    json!({
        "age": 20,
        "Gender": "Male",
        "Academic_Level": "Undergraduate",
        "Country": " india ",
        "Avg_Daily_Usage_Hours": 3.0,
        "Most_Used_Platform": "instagram",
        "Sleep_Hours_Per_Night": 7.0,
        "Relationship_Status": "single"
    })
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
