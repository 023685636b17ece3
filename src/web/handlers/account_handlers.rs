// src/web/handlers/account_handlers.rs
use rocket::serde::json::Json;
use rocket::State;

use crate::auth::AuthenticatedUser;
use crate::core::JobBoard;
use crate::error::ApiError;
use crate::types::{ActionResponse, LoginRequest, LoginResponse, OnboardRequest, User};

pub async fn login_handler(
    request: Json<LoginRequest>,
    board: &State<JobBoard>,
) -> Result<Json<LoginResponse>, ApiError> {
    board.login(&request).map(Json)
}

pub async fn get_current_user_handler(auth: AuthenticatedUser, board: &State<JobBoard>) -> Json<User> {
    Json(board.me(auth.user()))
}

pub async fn onboard_handler(
    request: Json<OnboardRequest>,
    auth: AuthenticatedUser,
    board: &State<JobBoard>,
) -> Result<Json<ActionResponse>, ApiError> {
    board.onboard(auth.user(), &request).map(Json)
}
