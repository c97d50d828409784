use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::dashboard::client::DashboardApi;
use crate::modules::prediction::schema::{AcademicLevel, Gender, PredictionRequest};
use crate::services::classifier::Label;

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionState {
    Idle,
    Pending,
    Shown(Label),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatState {
    Idle,
    Pending,
    Shown,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    You,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::You => "You",
            Sender::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Utc>,
}

pub fn default_form() -> PredictionRequest {
    PredictionRequest {
        age: 20,
        gender: Gender::Male,
        academic_level: AcademicLevel::HighSchool,
        country: "India".to_string(),
        avg_daily_usage_hours: 3.0,
        most_used_platform: "Instagram".to_string(),
        sleep_hours_per_night: 7.0,
        relationship_status: "Single".to_string(),
    }
}

/// Client-side state: the form, the last label and the transcript.
///
/// The prediction and chat flows move independently. The chat context is
/// built from the form as it is when the message is sent, so it can disagree
/// with the inputs that produced `last_prediction`.
pub struct DashboardSession {
    pub form: PredictionRequest,
    last_prediction: Option<Label>,
    transcript: Vec<TranscriptEntry>,
    prediction_state: PredictionState,
    chat_state: ChatState,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(default_form())
    }
}

impl DashboardSession {
    pub fn new(form: PredictionRequest) -> Self {
        Self {
            form,
            last_prediction: None,
            transcript: Vec::new(),
            prediction_state: PredictionState::Idle,
            chat_state: ChatState::Idle,
        }
    }

    pub fn last_prediction(&self) -> Option<&Label> {
        self.last_prediction.as_ref()
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn prediction_state(&self) -> &PredictionState {
        &self.prediction_state
    }

    pub fn chat_state(&self) -> &ChatState {
        &self.chat_state
    }

    pub fn chat_context(&self) -> Map<String, Value> {
        let mut context = Map::new();
        context.insert(
            "Mind_Score".to_string(),
            self.last_prediction.clone().unwrap_or(Value::Null),
        );
        context.insert("Age".to_string(), Value::from(self.form.age));
        context.insert(
            "Sleep_Hours_Per_Night".to_string(),
            Value::from(self.form.sleep_hours_per_night),
        );
        context.insert(
            "Avg_Daily_Usage_Hours".to_string(),
            Value::from(self.form.avg_daily_usage_hours),
        );
        context.insert(
            "Academic_Level".to_string(),
            Value::from(self.form.academic_level.as_str()),
        );
        context
    }

    pub async fn predict(&mut self, api: &dyn DashboardApi) -> &PredictionState {
        self.prediction_state = PredictionState::Pending;

        self.prediction_state = match api.predict(&self.form).await {
            Ok(label) => {
                self.last_prediction = Some(label.clone());
                PredictionState::Shown(label)
            }
            Err(e) => PredictionState::Failed(e.to_string()),
        };

        &self.prediction_state
    }

    /// Sends `message` with the current context. Blank messages are ignored
    /// and leave the chat state untouched.
    pub async fn send_chat(&mut self, api: &dyn DashboardApi, message: &str) -> &ChatState {
        if message.trim().is_empty() {
            return &self.chat_state;
        }

        self.chat_state = ChatState::Pending;
        let context = self.chat_context();

        self.chat_state = match api.chat(message, &context).await {
            Ok(reply) => {
                let now = Utc::now();
                self.transcript.push(TranscriptEntry {
                    sender: Sender::You,
                    text: message.to_string(),
                    at: now,
                });
                self.transcript.push(TranscriptEntry {
                    sender: Sender::Bot,
                    text: reply,
                    at: now,
                });
                ChatState::Shown
            }
            Err(e) => ChatState::Failed(e.to_string()),
        };

        &self.chat_state
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match field.to_ascii_lowercase().as_str() {
            "age" => self.form.age = parse_number(field, value)?,
            "gender" => self.form.gender = parse_enum(field, value)?,
            "academic_level" | "level" => self.form.academic_level = parse_enum(field, value)?,
            "country" => self.form.country = value.to_string(),
            "usage" | "avg_daily_usage_hours" => {
                self.form.avg_daily_usage_hours = parse_number(field, value)?
            }
            "platform" | "most_used_platform" => self.form.most_used_platform = value.to_string(),
            "sleep" | "sleep_hours_per_night" => {
                self.form.sleep_hours_per_night = parse_number(field, value)?
            }
            "relationship" | "relationship_status" => {
                self.form.relationship_status = value.to_string()
            }
            other => return Err(format!("Unknown field: {}", other)),
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got {:?}", field, value))
}

fn parse_enum<T: serde::de::DeserializeOwned>(field: &str, value: &str) -> Result<T, String> {
    serde_json::from_value(Value::String(value.to_string()))
        .map_err(|_| format!("{} does not accept {:?}", field, value))
}
