// src/core/board.rs
//! The demo job board: every contract operation over the static dataset.
//!
//! Both the mock transport and the Rocket handlers call into [`JobBoard`], so
//! mock mode and a locally served backend agree on every response. Nothing
//! here mutates the dataset; mutating operations only shape a response.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::auth::DemoToken;
use crate::core::dataset::Dataset;
use crate::error::{ApiError, ApiResult};
use crate::jd_generator;
use crate::policy::{authorize, Action};
use crate::types::{
    ActionResponse, Applicant, Application, ApplicationSource, ApplyRequest, CreateJobRequest,
    EmployerJob, FeedItem, Invitation, InvitationStatus, InviteRequest, Job, JobDescriptionRequest,
    JobDescriptionResponse, JobStatus, LoginRequest, LoginResponse, OnboardRequest, RespondRequest,
    Role, TalentInvitationStatus, TalentMatch, User,
};

#[derive(Debug, Clone)]
pub struct JobBoard {
    data: Arc<Dataset>,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new(Dataset::demo())
    }
}

impl JobBoard {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    /// Demo sign-in. Credentials are never checked; unknown emails get the
    /// default talent account.
    pub fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        if request.email.trim().is_empty() {
            return Err(ApiError::validation("Email is required"));
        }

        let user = match self.data.account_by_email(&request.email) {
            Some(user) => user.clone(),
            None => self.default_account()?,
        };

        info!("Demo login for {} as {}", request.email.trim(), user.id);

        Ok(LoginResponse {
            token: DemoToken::mint(&user.id),
            user,
        })
    }

    /// Resolve the account behind a bearer token. Any non-empty token
    /// authenticates.
    pub fn actor(&self, token: &str) -> ApiResult<User> {
        if token.trim().is_empty() {
            return Err(ApiError::missing_token());
        }

        match DemoToken::account_id(token).and_then(|id| self.data.account(id)) {
            Some(user) => Ok(user.clone()),
            None => self.default_account(),
        }
    }

    fn default_account(&self) -> ApiResult<User> {
        self.data
            .default_talent()
            .cloned()
            .ok_or_else(|| ApiError::unexpected("Default demo account missing"))
    }

    fn find_job(&self, id: &str) -> ApiResult<&Job> {
        self.data
            .job(id)
            .ok_or_else(|| ApiError::not_found("Job not found"))
    }

    pub fn list_jobs(&self, search: Option<&str>) -> Vec<Job> {
        let query = search.unwrap_or_default();
        self.data
            .jobs
            .iter()
            .filter(|job| job.matches_search(query))
            .cloned()
            .collect()
    }

    pub fn job(&self, id: &str) -> ApiResult<Job> {
        self.find_job(id).cloned()
    }

    pub fn me(&self, actor: &User) -> User {
        actor.clone()
    }

    pub fn onboard(&self, actor: &User, request: &OnboardRequest) -> ApiResult<ActionResponse> {
        let role: Role = request.role.parse().map_err(ApiError::Validation)?;
        info!("User {} onboarded as {}", actor.email, role);
        Ok(ActionResponse::success("Onboarding completed"))
    }

    pub fn create_job(&self, actor: &User, request: &CreateJobRequest) -> ApiResult<Job> {
        authorize(actor, Action::CreateJob).into_result()?;

        let tech_stack: Vec<String> = request
            .tech_stack
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let deadline = match request.deadline {
            Some(deadline) if !request.title.trim().is_empty() && !tech_stack.is_empty() => {
                deadline
            }
            _ => {
                return Err(ApiError::validation(
                    "Title, technologies and deadline are required",
                ))
            }
        };

        let description = if request.description.trim().is_empty() {
            "No description provided".to_string()
        } else {
            request.description.clone()
        };

        let mut id = uuid::Uuid::new_v4().simple().to_string();
        id.truncate(9);

        let job = Job {
            id,
            title: request.title.trim().to_string(),
            company: actor.company.clone().unwrap_or_default(),
            description,
            requirements: request.requirements.clone(),
            tech_stack,
            deadline,
            application_count: 0,
            owner_id: actor.id.clone(),
            status: JobStatus::Active,
        };

        info!("New job {} created by {} (not persisted)", job.id, actor.email);
        Ok(job)
    }

    pub fn employer_jobs(&self, actor: &User) -> ApiResult<Vec<EmployerJob>> {
        authorize(actor, Action::ListOwnJobs).into_result()?;
        Ok(self
            .data
            .jobs
            .iter()
            .filter(|job| job.owner_id == actor.id)
            .map(EmployerJob::from)
            .collect())
    }

    pub fn applicants(&self, actor: &User, job_id: &str) -> ApiResult<Vec<Applicant>> {
        let job = self.find_job(job_id)?;
        authorize(actor, Action::ViewApplicants(job)).into_result()?;
        Ok(self.data.applicants.get(job_id).cloned().unwrap_or_default())
    }

    pub fn matched_talents(&self, actor: &User, job_id: &str) -> ApiResult<Vec<TalentMatch>> {
        let job = self.find_job(job_id)?;
        authorize(actor, Action::ViewMatches(job)).into_result()?;

        let mut matches = self.data.matches.get(job_id).cloned().unwrap_or_default();
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Ok(matches)
    }

    pub fn invite(&self, actor: &User, job_id: &str, request: &InviteRequest) -> ApiResult<ActionResponse> {
        let job = self.find_job(job_id)?;
        authorize(actor, Action::Invite(job)).into_result()?;

        if request.talent_id.trim().is_empty() {
            return Err(ApiError::validation("Talent ID is required"));
        }

        info!(
            "Invitation sent to talent {} for job {} by {}",
            request.talent_id, job.id, actor.email
        );

        Ok(ActionResponse::success("Invitation sent successfully")
            .with_invitation_status(TalentInvitationStatus::Pending))
    }

    pub fn apply(&self, actor: &User, job_id: &str, request: &ApplyRequest) -> ApiResult<ActionResponse> {
        let job = self.find_job(job_id)?;
        authorize(actor, Action::Apply(job)).into_result()?;

        let source: ApplicationSource = match request.source.as_deref() {
            None | Some("") => ApplicationSource::default(),
            Some(raw) => raw.parse().map_err(ApiError::Validation)?,
        };

        if job.status == JobStatus::Closed {
            return Err(ApiError::validation("Application deadline has passed"));
        }

        info!(
            "Application submitted for job {} by {} ({:?})",
            job.id, actor.email, source
        );

        Ok(
            ActionResponse::success("Your application has been submitted successfully!")
                .with_submission(job.id.clone(), Utc::now()),
        )
    }

    pub fn invitations(&self, actor: &User) -> ApiResult<Vec<Invitation>> {
        authorize(actor, Action::ListInvitations).into_result()?;
        Ok(self
            .data
            .invitations
            .iter()
            .filter(|inv| inv.talent_id == actor.id)
            .cloned()
            .collect())
    }

    /// Answer a pending invitation. Only Accepted and Declined are accepted,
    /// and an invitation that was already answered stays as it is.
    pub fn respond(&self, actor: &User, invitation_id: &str, request: &RespondRequest) -> ApiResult<ActionResponse> {
        authorize(actor, Action::RespondInvitation).into_result()?;

        let status = match request.status.as_str() {
            "Accepted" => InvitationStatus::Accepted,
            "Declined" => InvitationStatus::Declined,
            _ => return Err(ApiError::validation("Invalid status")),
        };

        let invitation = self
            .data
            .invitations
            .iter()
            .find(|inv| inv.id == invitation_id && inv.talent_id == actor.id)
            .ok_or_else(|| ApiError::not_found("Invitation not found"))?;

        if invitation.status.is_terminal() {
            return Err(ApiError::validation(format!(
                "Invitation already {}",
                invitation.status.as_str().to_lowercase()
            )));
        }

        info!(
            "Invitation {} responded with status: {}",
            invitation.id,
            status.as_str()
        );

        Ok(ActionResponse::success(format!(
            "Invitation {}",
            status.as_str().to_lowercase()
        )))
    }

    /// Applications of the actor, most recent first
    pub fn applications(&self, actor: &User) -> ApiResult<Vec<Application>> {
        authorize(actor, Action::ListApplications).into_result()?;

        // the demo dataset holds applications for the default talent only
        if actor.id != crate::core::dataset::DEFAULT_TALENT_ID {
            return Ok(vec![]);
        }

        let mut applications = self.data.applications.clone();
        applications.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        Ok(applications)
    }

    /// Open jobs ranked by static match score
    pub fn feed(&self, actor: &User) -> ApiResult<Vec<FeedItem>> {
        authorize(actor, Action::ViewFeed).into_result()?;

        let mut items: Vec<FeedItem> = self
            .data
            .jobs
            .iter()
            .filter_map(|job| {
                self.data.feed_scores.get(&job.id).map(|score| FeedItem {
                    id: job.id.clone(),
                    title: job.title.clone(),
                    company: job.company.clone(),
                    deadline: job.deadline,
                    score: *score,
                    technologies: job.tech_stack.clone(),
                })
            })
            .collect();
        items.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(items)
    }

    pub fn generate_description(&self, request: &JobDescriptionRequest) -> ApiResult<JobDescriptionResponse> {
        let description = jd_generator::generate(&request.title, &request.technologies)?;
        Ok(JobDescriptionResponse { description })
    }
}
