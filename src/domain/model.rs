use serde::{Deserialize, Serialize};

/// Loosely typed field value as it appears in a seed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Raw service record. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceInput {
    pub id: Option<RawValue>,
    pub name: Option<RawValue>,
    pub doctor: Option<RawValue>,
    pub users_month1: Option<RawValue>,
    pub users_month2: Option<RawValue>,
    pub cost: Option<RawValue>,
    pub duration_minutes: Option<RawValue>,
}

/// Raw feedback request record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub age: Option<RawValue>,
    pub education: Option<String>,
    pub feedback_goal: Option<String>,
    pub request_date: Option<String>,
    pub request_time: Option<String>,
}
