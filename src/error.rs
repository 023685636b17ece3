// src/error.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;

use crate::types::ErrorBody;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of the board contract, in either adapter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        ApiError::Unexpected(message.into())
    }

    pub fn missing_token() -> Self {
        ApiError::Unauthorized("Authorization token required".to_string())
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Unauthorized(_) => Status::Unauthorized,
            ApiError::Forbidden(_) => Status::Forbidden,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Upstream { status, .. } => {
                Status::from_code(*status).unwrap_or(Status::BadGateway)
            }
            ApiError::Unexpected(_) => Status::InternalServerError,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "AUTHORIZATION_ERROR",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Upstream { .. } => "UPSTREAM_ERROR",
            ApiError::Unexpected(_) => "INTERNAL_ERROR",
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string(), self.error_code())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Unexpected(format!("Malformed payload: {}", e))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Unexpected(format!("Request failed: {}", e))
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            tracing::error!("{} {} failed: {}", req.method(), req.uri(), self);
        } else {
            tracing::warn!("{} {} rejected ({}): {}", req.method(), req.uri(), status.code, self);
        }

        let mut response = Json(self.body()).respond_to(req)?;
        response.set_status(status);
        Ok(response)
    }
}
