// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::auth::OptionalAuth;
use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::{ActionResponse, JobDescriptionRequest, JobDescriptionResponse};

pub async fn generate_description_handler(
    request: Json<JobDescriptionRequest>,
    board: &State<JobBoard>,
) -> Result<Json<JobDescriptionResponse>, ApiError> {
    info!("Generating job description for {}", request.title);
    board.generate_description(&request).map(Json)
}

pub async fn health_handler(auth: OptionalAuth) -> Json<ActionResponse> {
    if let Some(auth) = auth.user {
        info!("Health check by authenticated user: {}", auth.email());
    } else {
        info!("Health check by anonymous user");
    }
    Json(ActionResponse::success("OK"))
}
