use serde::{Deserialize, Serialize};

use super::schema::PredictionRequest;

pub const FEATURE_NAMES: [&str; 8] = [
    "Age",
    "Gender",
    "Academic_Level",
    "Country",
    "Avg_Daily_Usage_Hours",
    "Most_Used_Platform",
    "Sleep_Hours_Per_Night",
    "Relationship_Status",
];

/// The single-row record the classifier was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Academic_Level")]
    pub academic_level: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Avg_Daily_Usage_Hours")]
    pub avg_daily_usage_hours: f64,
    #[serde(rename = "Most_Used_Platform")]
    pub most_used_platform: String,
    #[serde(rename = "Sleep_Hours_Per_Night")]
    pub sleep_hours_per_night: f64,
    #[serde(rename = "Relationship_Status")]
    pub relationship_status: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl FeatureRecord {
    pub fn feature(&self, name: &str) -> Option<FeatureValue<'_>> {
        let value = match name {
            "Age" => FeatureValue::Number(self.age as f64),
            "Gender" => FeatureValue::Text(&self.gender),
            "Academic_Level" => FeatureValue::Text(&self.academic_level),
            "Country" => FeatureValue::Text(&self.country),
            "Avg_Daily_Usage_Hours" => FeatureValue::Number(self.avg_daily_usage_hours),
            "Most_Used_Platform" => FeatureValue::Text(&self.most_used_platform),
            "Sleep_Hours_Per_Night" => FeatureValue::Number(self.sleep_hours_per_night),
            "Relationship_Status" => FeatureValue::Text(&self.relationship_status),
            _ => return None,
        };
        Some(value)
    }
}

impl From<&PredictionRequest> for FeatureRecord {
    fn from(req: &PredictionRequest) -> Self {
        Self {
            age: req.age,
            gender: req.gender.as_str().to_string(),
            academic_level: req.academic_level.as_str().to_string(),
            country: title_case(req.country.trim()),
            avg_daily_usage_hours: req.avg_daily_usage_hours,
            most_used_platform: title_case(req.most_used_platform.trim()),
            sleep_hours_per_night: req.sleep_hours_per_night,
            relationship_status: title_case(req.relationship_status.trim()),
        }
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"in relationship"` becomes `"In Relationship"` and `"TikTok"`
/// becomes `"Tiktok"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
