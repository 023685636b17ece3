// src/web/handlers/job_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::Job;

pub async fn list_jobs_handler(search: Option<String>, board: &State<JobBoard>) -> Json<Vec<Job>> {
    let jobs = board.list_jobs(search.as_deref());
    info!(
        "Job search {:?} matched {} job(s)",
        search.as_deref().unwrap_or_default(),
        jobs.len()
    );
    Json(jobs)
}

pub async fn get_job_handler(id: &str, board: &State<JobBoard>) -> Result<Json<Job>, ApiError> {
    board.job(id).map(Json)
}
