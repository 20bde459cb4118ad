use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use vitals_fuzzy::VariableKey;

/// Errors raised while decoding records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid record JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Risk band assigned by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Exact, case-sensitive match on the service labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored prediction: the submitted readings and the service's verdict.
///
/// Readings are taken as-is; range checks are the service's job.
/// `risk_level` is kept verbatim so that labels this crate does not know
/// still reach the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub bmi: f64,
    pub heart_rate: f64,
    pub sleep_hours: f64,
    pub exercise_level: f64,
    pub risk_score: f64,
    pub risk_level: String,
    pub recommendation: String,
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<NaiveDateTime>,
}

impl Record {
    pub fn from_json(text: &str) -> Result<Record, RecordError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a JSON array of records, e.g. a user's history.
    pub fn list_from_json(text: &str) -> Result<Vec<Record>, RecordError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Raw reading for one catalog variable.
    pub fn reading(&self, key: VariableKey) -> f64 {
        match key {
            VariableKey::Bmi => self.bmi,
            VariableKey::HeartRate => self.heart_rate,
            VariableKey::SleepHours => self.sleep_hours,
            VariableKey::ExerciseLevel => self.exercise_level,
        }
    }

    /// Parsed risk level; `None` for labels outside LOW/MEDIUM/HIGH.
    pub fn level(&self) -> Option<RiskLevel> {
        RiskLevel::parse(&self.risk_level)
    }
}

// The service emits naive UTC timestamps; RFC 3339 with an offset is accepted too.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(naive));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.naive_utc()))
        .map_err(serde::de::Error::custom)
}
