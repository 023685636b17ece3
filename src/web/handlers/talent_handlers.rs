// src/web/handlers/talent_handlers.rs
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;

use crate::auth::AuthenticatedUser;
use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::{
    ActionResponse, Application, ApplyRequest, FeedItem, Invitation, RespondRequest,
};

pub async fn apply_handler(
    job_id: &str,
    request: Option<Json<ApplyRequest>>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<ActionResponse>>, ApiError> {
    let request = request.map(|r| r.into_inner()).unwrap_or_default();
    let response = board.apply(auth.user(), job_id, &request)?;
    Ok(Custom(Status::Created, Json(response)))
}

pub async fn invitations_handler(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Invitation>>, ApiError> {
    board.invitations(auth.user()).map(Json)
}

pub async fn respond_handler(
    invitation_id: &str,
    request: Json<RespondRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<ActionResponse>, ApiError> {
    board.respond(auth.user(), invitation_id, &request).map(Json)
}

pub async fn applications_handler(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Application>>, ApiError> {
    board.applications(auth.user()).map(Json)
}

pub async fn feed_handler(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    board.feed(auth.user()).map(Json)
}
