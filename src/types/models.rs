// src/types/models.rs
//! Transport-level records exchanged between the client layer and the board

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employer,
    Talent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "Employer",
            Role::Talent => "Talent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employer" => Ok(Role::Employer),
            "talent" => Ok(Role::Talent),
            other => Err(format!("Invalid role: {}. Use Employer or Talent", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(rename = "tech_stack", alias = "technologies", default)]
    pub tech_stack: Vec<String>,
    pub deadline: NaiveDate,
    pub application_count: u32,
    pub owner_id: String,
    pub status: JobStatus,
}

impl Job {
    /// Case-insensitive substring match on title, company and tech stack.
    /// An empty query matches every job; whitespace is part of the query.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.company.to_lowercase().contains(&needle)
            || self
                .tech_stack
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

/// Summary row for the employer's own job list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub applicants: u32,
    pub deadline: NaiveDate,
    pub status: JobStatus,
}

impl From<&Job> for EmployerJob {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            applicants: job.application_count,
            deadline: job.deadline,
            status: job.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TalentInvitationStatus {
    None,
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMatch {
    pub id: String,
    pub name: String,
    pub email: String,
    pub match_score: u8,
    pub invitation_status: TalentInvitationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub source: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationSource {
    #[default]
    Manual,
    Invitation,
}

impl FromStr for ApplicationSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(ApplicationSource::Manual),
            "invitation" => Ok(ApplicationSource::Invitation),
            other => Err(format!("Invalid source: {}. Use manual or invitation", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub source: ApplicationSource,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
}

impl InvitationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvitationStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "Pending",
            InvitationStatus::Accepted => "Accepted",
            InvitationStatus::Declined => "Declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub deadline: NaiveDate,
    pub status: InvitationStatus,
    #[serde(skip)]
    pub talent_id: String,
}

/// One entry of the talent's ranked job feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub company: String,
    pub deadline: NaiveDate,
    pub score: u8,
    pub technologies: Vec<String>,
}
