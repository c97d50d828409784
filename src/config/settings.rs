use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::services::llm::DEFAULT_BASE_URL;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please set {0} environment variable")]
    MissingVar(&'static str),
}

/// Settings for the prediction/chat API.
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub model_path: PathBuf,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;

        Ok(Self {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            gemini_base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("model.json")),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8000".to_string()),
        })
    }
}

/// Settings for the advice web app. A missing credential is not an error
/// here; the model calls fail later instead.
#[derive(Debug, Clone)]
pub struct AdviceSettings {
    pub google_api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub user_data_url: String,
    pub bind_addr: String,
}

impl AdviceSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            google_api_key: lookup("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty()),
            model: lookup("ADVICE_MODEL").unwrap_or_else(|| "gemini-2.0-flash".to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_data_url: lookup("USER_DATA_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000/user-data".to_string()),
            bind_addr: lookup("ADVICE_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:5000".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn api_requires_gemini_key() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Please set GEMINI_API_KEY environment variable");

        assert!(Settings::from_lookup(lookup(&[("GEMINI_API_KEY", "")])).is_err());
    }

    #[test]
    fn api_defaults() {
        let settings = Settings::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();
        assert_eq!(settings.gemini_model, "gemini-1.5-flash");
        assert_eq!(settings.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.model_path, PathBuf::from("model.json"));
        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn advice_tolerates_missing_key() {
        let settings = AdviceSettings::from_lookup(lookup(&[("USER_DATA_URL", "http://api/user-data")]));
        assert!(settings.google_api_key.is_none());
        assert_eq!(settings.model, "gemini-2.0-flash");
        assert_eq!(settings.user_data_url, "http://api/user-data");
    }
}
