// src/types/requests.rs
//! Request bodies of the board contract. Every field defaults so that
//! validation happens in the board and reports a 400, not a decode failure.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Non-string values read as empty so the board rejects them with its own
/// message.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "technologies", alias = "tech_stack", default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    #[serde(default)]
    pub talent_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RespondRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDescriptionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_status_reads_as_empty() {
        for raw in [json!({ "status": 1 }), json!({ "status": null }), json!({})] {
            let request: RespondRequest = serde_json::from_value(raw).unwrap();
            assert_eq!(request.status, "");
        }

        let request: RespondRequest =
            serde_json::from_value(json!({ "status": "Accepted" })).unwrap();
        assert_eq!(request.status, "Accepted");
    }
}
