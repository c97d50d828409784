use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::prediction::model::FeatureRecord;
use crate::services::classifier::Label;

/// The most recent successful prediction, served flat so every field reads
/// as one context line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    #[serde(flatten)]
    pub record: FeatureRecord,
    #[serde(rename = "Mind_Score")]
    pub mind_score: Label,
    #[serde(skip)]
    pub recorded_at: DateTime<Utc>,
}

impl UserSnapshot {
    pub fn new(record: FeatureRecord, mind_score: Label) -> Self {
        Self {
            record,
            mind_score,
            recorded_at: Utc::now(),
        }
    }
}
