use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::services::classifier::Label;

pub const PLATFORMS: [&str; 12] = [
    "Instagram",
    "Twitter",
    "TikTok",
    "YouTube",
    "Facebook",
    "LinkedIn",
    "Snapchat",
    "LINE",
    "KakaoTalk",
    "VKontakte",
    "WhatsApp",
    "WeChat",
];

pub const RELATIONSHIP_STATUSES: [&str; 3] = ["In Relationship", "Single", "Complicated"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicLevel {
    Undergraduate,
    Graduate,
    #[serde(rename = "High School")]
    HighSchool,
}

impl AcademicLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicLevel::Undergraduate => "Undergraduate",
            AcademicLevel::Graduate => "Graduate",
            AcademicLevel::HighSchool => "High School",
        }
    }
}

/// Body of `POST /predict`. Field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(range(exclusive_min = 0, exclusive_max = 100, message = "age must be between 1 and 99"))]
    #[serde(deserialize_with = "integral")]
    pub age: i64,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Academic_Level")]
    pub academic_level: AcademicLevel,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Avg_Daily_Usage_Hours")]
    #[validate(range(
        exclusive_min = 0.0,
        exclusive_max = 50.0,
        message = "Avg_Daily_Usage_Hours must be greater than 0 and less than 50"
    ))]
    pub avg_daily_usage_hours: f64,
    #[serde(rename = "Most_Used_Platform")]
    #[validate(custom(function = "validate_platform"))]
    pub most_used_platform: String,
    #[serde(rename = "Sleep_Hours_Per_Night")]
    #[validate(range(
        exclusive_min = 1.0,
        exclusive_max = 12.0,
        message = "Sleep_Hours_Per_Night must be greater than 1 and less than 12"
    ))]
    pub sleep_hours_per_night: f64,
    #[serde(rename = "Relationship_Status")]
    #[validate(custom(function = "validate_relationship_status"))]
    pub relationship_status: String,
}

/// Accepts integers and floats with no fractional part, so `20.0` reads as `20`.
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        Raw::Float(f) => Err(D::Error::custom(format!("expected an integer, got {}", f))),
    }
}

fn one_of(value: &str, allowed: &[&str], code: &'static str) -> Result<(), ValidationError> {
    let value = value.trim();
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    let mut err = ValidationError::new(code);
    err.message = Some(format!("expected one of: {}", allowed.join(", ")).into());
    Err(err)
}

fn validate_platform(value: &String) -> Result<(), ValidationError> {
    one_of(value, &PLATFORMS, "platform")
}

fn validate_relationship_status(value: &String) -> Result<(), ValidationError> {
    one_of(value, &RELATIONSHIP_STATUSES, "relationship_status")
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Label,
}
