use chrono::{SecondsFormat, Utc};
use serde::{self, Deserialize, Serialize};

use super::Subject;

/// Current UTC time as an RFC 3339 / ISO-8601 string.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub answer: String,
    pub subject: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: now_timestamp(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReadyStatus {
    pub status: String,
    pub provider: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct SubjectList {
    pub subjects: &'static [Subject],
}

#[derive(Debug, Serialize, Clone)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub docs: &'static [&'static str],
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}
