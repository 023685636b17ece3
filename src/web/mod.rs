// src/web/mod.rs
pub mod handlers;

use anyhow::{anyhow, Result};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::auth::{AuthError, AuthenticatedUser, OptionalAuth};
use crate::core::config_manager::ServerConfig;
use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::{
    ActionResponse, Applicant, Application, ApplyRequest, CreateJobRequest, EmployerJob,
    ErrorBody, FeedItem, Invitation, InviteRequest, Job, JobDescriptionRequest,
    JobDescriptionResponse, LoginRequest, LoginResponse, OnboardRequest, RespondRequest,
    TalentMatch, User,
};

/// Prefix every route is mounted under
pub const API_BASE: &str = "/api";

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Authorization, Content-Type",
        ));
    }
}

// Public job listing

#[get("/jobs?<search>")]
pub async fn list_jobs(search: Option<String>, board: &State<JobBoard>) -> Json<Vec<Job>> {
    handlers::list_jobs_handler(search, board).await
}

#[get("/jobs/<id>")]
pub async fn get_job(id: &str, board: &State<JobBoard>) -> Result<Json<Job>, ApiError> {
    handlers::get_job_handler(id, board).await
}

// Account

#[post("/auth/login", data = "<request>")]
pub async fn login(
    request: Json<LoginRequest>,
    board: &State<JobBoard>,
) -> Result<Json<LoginResponse>, ApiError> {
    handlers::login_handler(request, board).await
}

#[get("/me")]
pub async fn get_current_user(auth: AuthenticatedUser, board: &State<JobBoard>) -> Json<User> {
    handlers::get_current_user_handler(auth, board).await
}

#[post("/me/onboard", data = "<request>")]
pub async fn onboard(
    request: Json<OnboardRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::onboard_handler(request, auth, board).await
}

// Employer

#[get("/employer/jobs")]
pub async fn employer_jobs(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<EmployerJob>>, ApiError> {
    handlers::employer_jobs_handler(auth, board).await
}

#[post("/employer/jobs", data = "<request>")]
pub async fn create_job(
    request: Json<CreateJobRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<Job>>, ApiError> {
    handlers::create_job_handler(request, auth, board).await
}

#[get("/employer/jobs/<job_id>/applicants")]
pub async fn job_applicants(
    job_id: &str,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Applicant>>, ApiError> {
    handlers::job_applicants_handler(job_id, auth, board).await
}

#[get("/employer/jobs/<job_id>/matched-talents")]
pub async fn matched_talents(
    job_id: &str,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<TalentMatch>>, ApiError> {
    handlers::matched_talents_handler(job_id, auth, board).await
}

#[post("/employer/jobs/<job_id>/invite", data = "<request>")]
pub async fn invite_talent(
    job_id: &str,
    request: Json<InviteRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<ActionResponse>>, ApiError> {
    handlers::invite_talent_handler(job_id, request, auth, board).await
}

// Talent

#[post("/talent/jobs/<job_id>/apply", data = "<request>")]
pub async fn apply(
    job_id: &str,
    request: Option<Json<ApplyRequest>>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Custom<Json<ActionResponse>>, ApiError> {
    handlers::apply_handler(job_id, request, auth, board).await
}

#[get("/talent/invitations")]
pub async fn invitations(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Invitation>>, ApiError> {
    handlers::invitations_handler(auth, board).await
}

#[post("/talent/invitations/<invitation_id>/respond", data = "<request>")]
pub async fn respond_to_invitation(
    invitation_id: &str,
    request: Json<RespondRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::respond_handler(invitation_id, request, auth, board).await
}

#[get("/talent/applications")]
pub async fn applications(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<Application>>, ApiError> {
    handlers::applications_handler(auth, board).await
}

#[get("/talent/feed")]
pub async fn feed(
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<Vec<FeedItem>>, ApiError> {
    handlers::feed_handler(auth, board).await
}

// Tools

#[post("/ai/jd", data = "<request>")]
pub async fn generate_description(
    request: Json<JobDescriptionRequest>,
    board: &State<JobBoard>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    handlers::generate_description_handler(request, board).await
}

#[get("/health")]
pub async fn health(auth: OptionalAuth) -> Json<ActionResponse> {
    handlers::health_handler(auth).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorBody> {
    Json(ErrorBody::new("Invalid request format", "BAD_REQUEST"))
}

#[rocket::catch(401)]
pub fn unauthorized(req: &Request) -> Json<ErrorBody> {
    let message = req
        .local_cache(|| None::<AuthError>)
        .as_ref()
        .map(|e| e.message())
        .unwrap_or("Authorization token required");
    Json(ErrorBody::new(message, "AUTHORIZATION_ERROR"))
}

#[rocket::catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody::new(
        format!("No route for {} {}", req.method(), req.uri().path()),
        "NOT_FOUND",
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorBody> {
    Json(ErrorBody::new(
        "Request body does not match the expected shape",
        "VALIDATION_ERROR",
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody::new("Internal server error", "INTERNAL_ERROR"))
}

/// Assemble the API around a board without binding a socket.
pub fn build_rocket(board: JobBoard) -> Rocket<Build> {
    build_with(rocket::build(), board)
}

fn build_with(rocket: Rocket<Build>, board: JobBoard) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(board)
        .register(
            API_BASE,
            catchers![bad_request, unauthorized, not_found, unprocessable, internal_error],
        )
        .mount(
            API_BASE,
            routes![
                list_jobs,
                get_job,
                login,
                get_current_user,
                onboard,
                employer_jobs,
                create_job,
                job_applicants,
                matched_talents,
                invite_talent,
                apply,
                invitations,
                respond_to_invitation,
                applications,
                feed,
                generate_description,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ServerConfig) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port))
        .merge(("log_level", "critical"));

    info!("Starting JobMatch API server");
    info!("Listening on http://{}:{}{}", config.address, config.port, API_BASE);

    build_with(rocket::custom(figment), JobBoard::default())
        .launch()
        .await
        .map_err(|e| anyhow!("Server failed: {}", e))?;
    Ok(())
}
