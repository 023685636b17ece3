// src/client/mock.rs
//! Mock adapter: matches the request path against a fixed route table and
//! answers from the in-process board. The dataset is never mutated, so
//! repeated reads return the same data.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use super::transport::{ApiRequest, Method, Transport};
use crate::core::JobBoard;
use crate::error::{ApiError, ApiResult};
use crate::types::User;

pub struct MockTransport {
    board: JobBoard,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(JobBoard::default())
    }
}

impl MockTransport {
    pub fn new(board: JobBoard) -> Self {
        Self { board }
    }

    fn actor(&self, request: &ApiRequest) -> ApiResult<User> {
        match request.bearer.as_deref() {
            Some(token) => self.board.actor(token),
            None => Err(ApiError::missing_token()),
        }
    }

    fn dispatch(&self, request: &ApiRequest) -> ApiResult<Value> {
        let url = Url::parse("http://mock.local")
            .and_then(|base| base.join(&request.path))
            .map_err(|_| not_found(&request.path))?;

        // segments stay percent-encoded; demo ids are plain ascii
        let segments: Vec<&str> = url
            .path_segments()
            .map(|parts| parts.filter(|p| !p.is_empty()).collect())
            .unwrap_or_default();

        let board = &self.board;

        match (request.method, segments.as_slice()) {
            (Method::Get, ["health"]) => to_value(json!({ "success": true, "message": "OK" })),
            (Method::Get, ["jobs"]) => {
                let search = url
                    .query_pairs()
                    .find(|(key, _)| key == "search")
                    .map(|(_, value)| value.into_owned());
                to_value(board.list_jobs(search.as_deref()))
            }
            (Method::Get, ["jobs", id]) => to_value(board.job(id)?),
            (Method::Post, ["auth", "login"]) => to_value(board.login(&body(request)?)?),
            (Method::Post, ["ai", "jd"]) => to_value(board.generate_description(&body(request)?)?),
            (Method::Get, ["me"]) => to_value(board.me(&self.actor(request)?)),
            (Method::Post, ["me", "onboard"]) => {
                to_value(board.onboard(&self.actor(request)?, &body(request)?)?)
            }
            (Method::Get, ["employer", "jobs"]) => {
                to_value(board.employer_jobs(&self.actor(request)?)?)
            }
            (Method::Post, ["employer", "jobs"]) => {
                to_value(board.create_job(&self.actor(request)?, &body(request)?)?)
            }
            (Method::Get, ["employer", "jobs", id, "applicants"]) => {
                to_value(board.applicants(&self.actor(request)?, id)?)
            }
            (Method::Get, ["employer", "jobs", id, "matched-talents"]) => {
                to_value(board.matched_talents(&self.actor(request)?, id)?)
            }
            (Method::Post, ["employer", "jobs", id, "invite"]) => {
                to_value(board.invite(&self.actor(request)?, id, &body(request)?)?)
            }
            (Method::Post, ["talent", "jobs", id, "apply"]) => {
                to_value(board.apply(&self.actor(request)?, id, &body(request)?)?)
            }
            (Method::Get, ["talent", "invitations"]) => {
                to_value(board.invitations(&self.actor(request)?)?)
            }
            (Method::Post, ["talent", "invitations", id, "respond"]) => {
                to_value(board.respond(&self.actor(request)?, id, &body(request)?)?)
            }
            (Method::Get, ["talent", "applications"]) => {
                to_value(board.applications(&self.actor(request)?)?)
            }
            (Method::Get, ["talent", "feed"]) => to_value(board.feed(&self.actor(request)?)?),
            _ => Err(not_found(&request.path)),
        }
    }
}

fn not_found(path: &str) -> ApiError {
    ApiError::not_found(format!("Mock endpoint not found: {}", path))
}

fn body<T: DeserializeOwned + Default>(request: &ApiRequest) -> ApiResult<T> {
    match &request.body {
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| ApiError::validation(format!("Malformed request body: {}", e))),
        None => Ok(T::default()),
    }
}

fn to_value<T: Serialize>(value: T) -> ApiResult<Value> {
    Ok(serde_json::to_value(value)?)
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        debug!("[mock] {} {}", request.method, request.path);
        self.dispatch(&request)
    }

    fn mode(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let mock = MockTransport::default();
        let err = mock.send(ApiRequest::get("/nowhere")).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::NotFound("Mock endpoint not found: /nowhere".into())
        );

        let wrong_verb = mock.send(ApiRequest::post("/jobs/1", json!({}))).await;
        assert!(matches!(wrong_verb, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_query_is_decoded() {
        let mock = MockTransport::default();
        let value = mock
            .send(ApiRequest::get("/jobs?search=Tailwind%20CSS"))
            .await
            .unwrap();
        let jobs = value.as_array().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0]["title"], "Senior React Developer");
    }

    #[tokio::test]
    async fn test_auth_routes_need_a_token() {
        let mock = MockTransport::default();
        let err = mock.send(ApiRequest::get("/me")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));

        let me = mock
            .send(ApiRequest::get("/me").with_bearer(Some("demo_token_42".into())))
            .await
            .unwrap();
        assert_eq!(me["id"], "user1");
        assert_eq!(me["role"], "Talent");
    }

    #[tokio::test]
    async fn test_non_string_status_is_invalid() {
        let mock = MockTransport::default();
        let err = mock
            .send(
                ApiRequest::post("/talent/invitations/inv1/respond", json!({ "status": 1 }))
                    .with_bearer(Some("demo_token_42".into())),
            )
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("Invalid status".into()));
    }
}
