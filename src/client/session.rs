// src/client/session.rs
//! Session/identity context. Owns the stored token and the cached user and
//! is the only thing that changes either.

use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::token_store::DemoProfile;
use super::ApiClient;
use crate::error::ApiResult;
use crate::types::{Role, User};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

pub struct Session {
    api: ApiClient,
    state: SessionState,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: SessionState::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Without a stored token there is nothing to check and no call is made
    pub async fn init(&mut self) {
        let has_token = self
            .api
            .tokens()
            .get_token()
            .is_some_and(|token| !token.is_empty());
        if !has_token {
            self.state.user = None;
            self.state.loading = false;
            return;
        }
        if let Err(e) = self.refresh().await {
            debug!("Session init left signed out: {}", e);
        }
    }

    /// Fetch the current user. A failure signs the session out; it is not
    /// retried.
    pub async fn refresh(&mut self) -> ApiResult<User> {
        self.state.loading = true;

        let result = self.api.current_user().await;
        match &result {
            Ok(user) => {
                self.state.user = Some(user.clone());
            }
            Err(e) => {
                warn!("[Auth] Failed to fetch user: {}", e);
                self.clear_stored_identity();
                self.state.user = None;
            }
        }

        self.state.loading = false;
        result
    }

    /// Demo sign-in: store the minted token and profile record, then load the
    /// user the same way `refresh` does.
    pub async fn login(&mut self, email: &str) -> anyhow::Result<User> {
        let response = self.api.login(email).await?;

        self.api.tokens().set_token(&response.token)?;
        self.api.tokens().set_demo_profile(&DemoProfile {
            email: response.user.email.clone(),
            role: response.user.role,
            logged_in_at: Utc::now(),
        })?;
        info!("Signed in as {}", response.user.email);

        Ok(self.refresh().await?)
    }

    pub async fn onboard(&mut self, role: Role) -> anyhow::Result<User> {
        self.api.onboard(role).await?;

        if let Some(mut profile) = self.api.tokens().demo_profile() {
            profile.role = Some(role);
            self.api.tokens().set_demo_profile(&profile)?;
        }

        Ok(self.refresh().await?)
    }

    /// Synchronous sign-out; the server is not told
    pub fn logout(&mut self) {
        self.clear_stored_identity();
        self.state.user = None;
        self.state.loading = false;
    }

    /// Token and demo profile always go together
    fn clear_stored_identity(&self) {
        let tokens = self.api.tokens();
        if let Err(e) = tokens.clear_token() {
            error!("Failed to clear stored token: {:#}", e);
        }
        if let Err(e) = tokens.clear_demo_profile() {
            error!("Failed to clear demo profile: {:#}", e);
        }
    }
}
