// src/auth.rs
use chrono::Utc;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::{Request, State};
use tracing::{debug, warn};

use crate::core::JobBoard;
use crate::types::User;

const DEMO_TOKEN_PREFIX: &str = "demo_token_";

/// Opaque bearer tokens handed out by the demo sign-in.
///
/// Format is `demo_token_<accountId>_<millis>`. The bare
/// `demo_token_<millis>` form and any other string are still valid bearer
/// tokens; they simply carry no account and resolve to the default talent.
pub struct DemoToken;

impl DemoToken {
    pub fn mint(account_id: &str) -> String {
        format!(
            "{}{}_{}",
            DEMO_TOKEN_PREFIX,
            account_id,
            Utc::now().timestamp_millis()
        )
    }

    pub fn account_id(token: &str) -> Option<&str> {
        let rest = token.strip_prefix(DEMO_TOKEN_PREFIX)?;
        let (account, millis) = rest.rsplit_once('_')?;
        if account.is_empty() || !millis.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(account)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    BoardUnavailable,
}

impl AuthError {
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Authorization token required",
            AuthError::InvalidToken => "Invalid authorization token format",
            AuthError::BoardUnavailable => "Job board not configured",
        }
    }
}

/// The account behind the request's bearer token
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthenticatedUser {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

fn fail(req: &Request<'_>, status: Status, error: AuthError) -> Outcome<AuthenticatedUser, AuthError> {
    // the 401 catcher reads this back to explain the rejection
    req.local_cache(|| Some(error));
    Outcome::Error((status, error))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let board = match req.guard::<&State<JobBoard>>().await {
            Outcome::Success(board) => board,
            _ => return fail(req, Status::InternalServerError, AuthError::BoardUnavailable),
        };

        let token = match req.headers().get_one("Authorization") {
            Some(header) if header.starts_with("Bearer ") => header[7..].trim(),
            Some(_) => {
                warn!("Invalid Authorization header format");
                return fail(req, Status::Unauthorized, AuthError::InvalidToken);
            }
            None => {
                warn!("Missing Authorization header");
                return fail(req, Status::Unauthorized, AuthError::MissingToken);
            }
        };

        match board.actor(token) {
            Ok(user) => {
                debug!("Request authenticated as {}", user.email);
                Outcome::Success(AuthenticatedUser {
                    user,
                    token: token.to_string(),
                })
            }
            Err(_) => fail(req, Status::Unauthorized, AuthError::MissingToken),
        }
    }
}

// Optional auth guard that doesn't fail if no auth is provided
pub struct OptionalAuth {
    pub user: Option<AuthenticatedUser>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalAuth {
    type Error = ();

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match AuthenticatedUser::from_request(req).await {
            Outcome::Success(auth) => Outcome::Success(OptionalAuth { user: Some(auth) }),
            _ => Outcome::Success(OptionalAuth { user: None }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_token_round_trips_account() {
        let token = DemoToken::mint("employer1");
        assert!(token.starts_with("demo_token_employer1_"));
        assert_eq!(DemoToken::account_id(&token), Some("employer1"));
    }

    #[test]
    fn test_legacy_and_foreign_tokens_carry_no_account() {
        assert_eq!(DemoToken::account_id("demo_token_1700000000000"), None);
        assert_eq!(DemoToken::account_id("abc"), None);
        assert_eq!(DemoToken::account_id("demo_token_user1_notdigits"), None);
    }
}
