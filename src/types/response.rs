// src/types/response.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::models::{TalentInvitationStatus, User};

/// Outcome of a mutating call. Optional fields are filled by the operations
/// that report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_status: Option<TalentInvitationStatus>,
}

impl ActionResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            job_id: None,
            submitted_at: None,
            invitation_status: None,
        }
    }

    pub fn with_submission(mut self, job_id: String, submitted_at: DateTime<Utc>) -> Self {
        self.job_id = Some(job_id);
        self.submitted_at = Some(submitted_at);
        self
    }

    pub fn with_invitation_status(mut self, status: TalentInvitationStatus) -> Self {
        self.invitation_status = Some(status);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionResponse {
    pub description: String,
}

/// Error body shared by handlers and catchers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_code: error_code.into(),
        }
    }
}
