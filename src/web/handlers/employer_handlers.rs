// src/web/handlers/employer_handlers.rs
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::auth::AuthenticatedUser;
use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::{
    ActionResponse, Applicant, CreateJobRequest, EmployerJob, InviteRequest, Job, TalentMatch,
};

pub async fn create_job_handler(
    request: Json<CreateJobRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<Job>>, ApiError> {
    info!("User {} creating job: {}", auth.email(), request.title);
    let job = board.create_job(auth.user(), &request)?;
    Ok(Custom(Status::Created, Json(job)))
}

pub async fn employer_jobs_handler(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<EmployerJob>>, ApiError> {
    board.employer_jobs(auth.user()).map(Json)
}

// ownership is checked by the board policy
pub async fn job_applicants_handler(
    job_id: &str,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Applicant>>, ApiError> {
    board.applicants(auth.user(), job_id).map(Json)
}

pub async fn matched_talents_handler(
    job_id: &str,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<TalentMatch>>, ApiError> {
    board.matched_talents(auth.user(), job_id).map(Json)
}

pub async fn invite_talent_handler(
    job_id: &str,
    request: Json<InviteRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<ActionResponse>>, ApiError> {
    let response = board.invite(auth.user(), job_id, &request)?;
    Ok(Custom(Status::Created, Json(response)))
}
