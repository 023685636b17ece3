// src/client/mod.rs
//! API access layer: one typed operation per contract endpoint, served by
//! whichever [`Transport`] was chosen at startup.

pub mod http;
pub mod mock;
pub mod session;
pub mod token_store;
pub mod transport;

pub use http::HttpTransport;
pub use mock::MockTransport;
pub use session::{Session, SessionState};
pub use token_store::{DemoProfile, FileStorage, MemoryStorage, Storage, TokenStore};
pub use transport::{ApiRequest, Method, Transport};

use anyhow::Result;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::core::config_manager::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::{
    ActionResponse, Applicant, Application, ApplicationSource, ApplyRequest, CreateJobRequest,
    EmployerJob, FeedItem, Invitation, InvitationStatus, InviteRequest, Job, JobDescriptionRequest,
    JobDescriptionResponse, LoginRequest, LoginResponse, OnboardRequest, RespondRequest, Role,
    TalentMatch, User,
};

/// Build an endpoint path from raw segments, percent-encoding each one
fn endpoint(segments: &[&str]) -> String {
    match Url::parse("http://localhost/") {
        Ok(mut url) => {
            if let Ok(mut path) = url.path_segments_mut() {
                path.clear().extend(segments);
            }
            url.path().to_string()
        }
        Err(_) => format!("/{}", segments.join("/")),
    }
}

fn body<T: Serialize>(payload: &T) -> ApiResult<Value> {
    Ok(serde_json::to_value(payload)?)
}

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self { transport, tokens }
    }

    /// Pick the adapter once: a configured base URL means remote, anything
    /// else means mock.
    pub fn from_config(config: &ClientConfig, tokens: TokenStore) -> Result<Self> {
        let transport: Arc<dyn Transport> = match &config.api_url {
            Some(url) => Arc::new(HttpTransport::new(url.clone())?),
            None => Arc::new(MockTransport::default()),
        };
        info!("API client using {} transport", transport.mode());
        Ok(Self::new(transport, tokens))
    }

    pub fn mode(&self) -> &'static str {
        self.transport.mode()
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest, include_auth: bool) -> ApiResult<R> {
        let bearer = if include_auth {
            self.tokens.get_token().filter(|token| !token.is_empty())
        } else {
            None
        };
        let value = self.transport.send(request.with_bearer(bearer)).await?;
        serde_json::from_value(value).map_err(ApiError::from)
    }

    // Jobs

    pub async fn get_jobs(&self, search: Option<&str>) -> ApiResult<Vec<Job>> {
        let mut path = endpoint(&["jobs"]);
        if let Some(query) = search.filter(|q| !q.is_empty()) {
            if let Ok(mut url) = Url::parse("http://localhost/") {
                url.query_pairs_mut().append_pair("search", query);
                path = format!("{}?{}", path, url.query().unwrap_or_default());
            }
        }
        self.call(ApiRequest::get(path), false).await
    }

    pub async fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.call(ApiRequest::get(endpoint(&["jobs", id])), false).await
    }

    // Auth

    pub async fn login(&self, email: &str) -> ApiResult<LoginResponse> {
        let payload = body(&LoginRequest {
            email: email.to_string(),
        })?;
        self.call(ApiRequest::post(endpoint(&["auth", "login"]), payload), false)
            .await
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.call(ApiRequest::get(endpoint(&["me"])), true).await
    }

    pub async fn onboard(&self, role: Role) -> ApiResult<ActionResponse> {
        let payload = body(&OnboardRequest {
            role: role.to_string(),
        })?;
        self.call(ApiRequest::post(endpoint(&["me", "onboard"]), payload), true)
            .await
    }

    // Employer

    pub async fn create_job(&self, request: &CreateJobRequest) -> ApiResult<Job> {
        self.call(ApiRequest::post(endpoint(&["employer", "jobs"]), body(request)?), true)
            .await
    }

    pub async fn employer_jobs(&self) -> ApiResult<Vec<EmployerJob>> {
        self.call(ApiRequest::get(endpoint(&["employer", "jobs"])), true)
            .await
    }

    pub async fn job_applicants(&self, job_id: &str) -> ApiResult<Vec<Applicant>> {
        let path = endpoint(&["employer", "jobs", job_id, "applicants"]);
        self.call(ApiRequest::get(path), true).await
    }

    pub async fn matched_talents(&self, job_id: &str) -> ApiResult<Vec<TalentMatch>> {
        let path = endpoint(&["employer", "jobs", job_id, "matched-talents"]);
        self.call(ApiRequest::get(path), true).await
    }

    pub async fn invite_talent(&self, job_id: &str, talent_id: &str) -> ApiResult<ActionResponse> {
        let path = endpoint(&["employer", "jobs", job_id, "invite"]);
        let payload = body(&InviteRequest {
            talent_id: talent_id.to_string(),
        })?;
        self.call(ApiRequest::post(path, payload), true).await
    }

    pub async fn generate_job_description(&self, title: &str, technologies: &[String]) -> ApiResult<JobDescriptionResponse> {
        let payload = body(&JobDescriptionRequest {
            title: title.to_string(),
            technologies: technologies.to_vec(),
        })?;
        self.call(ApiRequest::post(endpoint(&["ai", "jd"]), payload), false)
            .await
    }

    // Talent

    pub async fn apply(&self, job_id: &str, source: Option<ApplicationSource>) -> ApiResult<ActionResponse> {
        let path = endpoint(&["talent", "jobs", job_id, "apply"]);
        let source = source.map(|s| match s {
            ApplicationSource::Manual => "manual".to_string(),
            ApplicationSource::Invitation => "invitation".to_string(),
        });
        self.call(ApiRequest::post(path, body(&ApplyRequest { source })?), true)
            .await
    }

    pub async fn invitations(&self) -> ApiResult<Vec<Invitation>> {
        self.call(ApiRequest::get(endpoint(&["talent", "invitations"])), true)
            .await
    }

    /// Only the two terminal states can be sent
    pub async fn respond_to_invitation(&self, invitation_id: &str, status: InvitationStatus) -> ApiResult<ActionResponse> {
        if !status.is_terminal() {
            return Err(ApiError::validation("Invalid status"));
        }
        let path = endpoint(&["talent", "invitations", invitation_id, "respond"]);
        let payload = body(&RespondRequest {
            status: status.as_str().to_string(),
        })?;
        self.call(ApiRequest::post(path, payload), true).await
    }

    pub async fn applications(&self) -> ApiResult<Vec<Application>> {
        self.call(ApiRequest::get(endpoint(&["talent", "applications"])), true)
            .await
    }

    pub async fn feed(&self) -> ApiResult<Vec<FeedItem>> {
        self.call(ApiRequest::get(endpoint(&["talent", "feed"])), true)
            .await
    }
}
