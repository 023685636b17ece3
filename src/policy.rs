// src/policy.rs
//! Authorization decisions for board operations.
//!
//! Every mutating call and every job-scoped read asks [`authorize`] before it
//! touches the dataset. Unknown jobs are reported as not found by the caller
//! before the policy runs.

use crate::error::ApiError;
use crate::types::{Job, Role, User};

/// What the actor is trying to do
#[derive(Debug, Clone, Copy)]
pub enum Action<'a> {
    CreateJob,
    ListOwnJobs,
    ViewApplicants(&'a Job),
    ViewMatches(&'a Job),
    Invite(&'a Job),
    Apply(&'a Job),
    ListInvitations,
    RespondInvitation,
    ListApplications,
    ViewFeed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(String),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(ApiError::Forbidden(reason)),
        }
    }
}

pub fn authorize(actor: &User, action: Action<'_>) -> Decision {
    match action {
        Action::CreateJob | Action::ListOwnJobs => require_employer(actor),
        Action::ViewApplicants(job) | Action::ViewMatches(job) | Action::Invite(job) => {
            match require_employer(actor) {
                Decision::Allow if job.owner_id == actor.id => Decision::Allow,
                Decision::Allow => {
                    Decision::Deny(format!("Job {} is not owned by {}", job.id, actor.email))
                }
                deny => deny,
            }
        }
        Action::Apply(_)
        | Action::ListInvitations
        | Action::RespondInvitation
        | Action::ListApplications
        | Action::ViewFeed => {
            // unset role counts as talent until onboarding
            if actor.role == Some(Role::Employer) {
                Decision::Deny("Talent account required".to_string())
            } else {
                Decision::Allow
            }
        }
    }
}

fn require_employer(actor: &User) -> Decision {
    if actor.role == Some(Role::Employer) {
        Decision::Allow
    } else {
        Decision::Deny("Employer account required".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobStatus;
    use chrono::NaiveDate;

    fn user(id: &str, role: Option<Role>) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            name: None,
            role,
            company: None,
        }
    }

    fn job_owned_by(owner: &str) -> Job {
        Job {
            id: "1".to_string(),
            title: "Senior React Developer".to_string(),
            company: "TechCorp".to_string(),
            description: String::new(),
            requirements: vec![],
            tech_stack: vec![],
            deadline: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            application_count: 0,
            owner_id: owner.to_string(),
            status: JobStatus::Active,
        }
    }

    #[test]
    fn test_owner_can_view_applicants() {
        let employer = user("employer1", Some(Role::Employer));
        let job = job_owned_by("employer1");
        assert!(authorize(&employer, Action::ViewApplicants(&job)).is_allowed());
        assert!(authorize(&employer, Action::Invite(&job)).is_allowed());
    }

    #[test]
    fn test_other_employer_is_denied() {
        let employer = user("employer2", Some(Role::Employer));
        let job = job_owned_by("employer1");
        assert!(!authorize(&employer, Action::ViewApplicants(&job)).is_allowed());
        assert!(matches!(
            authorize(&employer, Action::Invite(&job)).into_result(),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_talent_actions() {
        let talent = user("user1", Some(Role::Talent));
        let unset = user("user9", None);
        let employer = user("employer1", Some(Role::Employer));
        let job = job_owned_by("employer1");

        assert!(authorize(&talent, Action::Apply(&job)).is_allowed());
        assert!(authorize(&unset, Action::ListApplications).is_allowed());
        assert!(!authorize(&employer, Action::RespondInvitation).is_allowed());
        assert!(!authorize(&talent, Action::CreateJob).is_allowed());
        assert!(!authorize(&talent, Action::ViewMatches(&job)).is_allowed());
    }
}
