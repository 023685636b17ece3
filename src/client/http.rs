// src/client/http.rs
//! Remote adapter: forwards every call to a real backend over HTTP

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

use super::transport::{ApiRequest, Method, Transport};
use crate::error::{ApiError, ApiResult};

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// No request timeout is configured; calls run until the server answers
    /// or the connection fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, request: &ApiRequest) -> ApiResult<reqwest::Request> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };

        Ok(builder.build()?)
    }
}

/// Turn a non-success response into an error carrying the server's message,
/// or the status text when the body has none.
pub fn upstream_error(status: StatusCode, body: &str) -> ApiError {
    let server_message = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        ["error", "message"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    let message = server_message.unwrap_or_else(|| {
        format!(
            "API error: {}",
            status.canonical_reason().unwrap_or("Unknown status")
        )
    });

    ApiError::Upstream {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let http_request = self.build(&request)?;
        debug!("Calling {} {}", request.method, http_request.url());

        let response = match self.client.execute(http_request).await {
            Ok(response) => response,
            Err(e) => {
                error!("[API] Error fetching {}: {}", request.path, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            response.json::<Value>().await.map_err(|e| {
                error!("[API] Unreadable response for {}: {}", request.path, e);
                ApiError::from(e)
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            let err = upstream_error(status, &body);
            error!("[API] Error fetching {}: {}", request.path, err);
            Err(err)
        }
    }

    fn mode(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_attaches_bearer_and_json() {
        let transport = HttpTransport::new("http://localhost:8000/api/").unwrap();
        let request = ApiRequest::post("/talent/jobs/1/apply", json!({ "source": "manual" }))
            .with_bearer(Some("demo_token_user1_1".into()));

        let built = transport.build(&request).unwrap();
        assert_eq!(built.method(), &reqwest::Method::POST);
        assert_eq!(built.url().as_str(), "http://localhost:8000/api/talent/jobs/1/apply");
        assert_eq!(
            built.headers().get(AUTHORIZATION).unwrap(),
            "Bearer demo_token_user1_1"
        );
        assert_eq!(built.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_build_without_token_sends_no_header() {
        let transport = HttpTransport::new("http://localhost:8000").unwrap();
        let built = transport.build(&ApiRequest::get("/jobs?search=react")).unwrap();
        assert!(built.headers().get(AUTHORIZATION).is_none());
        assert_eq!(built.url().query(), Some("search=react"));
    }

    #[test]
    fn test_upstream_error_prefers_server_message() {
        let err = upstream_error(StatusCode::BAD_REQUEST, r#"{"error":"Invalid status"}"#);
        assert_eq!(
            err,
            ApiError::Upstream {
                status: 400,
                message: "Invalid status".into()
            }
        );

        let err = upstream_error(StatusCode::NOT_FOUND, r#"{"message":"gone"}"#);
        assert_eq!(err.to_string(), "gone");
    }

    #[test]
    fn test_upstream_error_falls_back_to_status_text() {
        let err = upstream_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.to_string(), "API error: Bad Gateway");
    }
}
