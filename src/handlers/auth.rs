// src/handlers/auth.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::run_blocking,
    models::user::{LoginRequest, LoginResponse},
    services::QuizService,
};

/// Logs a participant in.
///
/// There are no credentials: every login creates a new user and returns its ID.
/// Returns 201 Created with `{"user_id": ...}`.
pub async fn login(
    State(quiz): State<QuizService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user = run_blocking(move || quiz.login(&payload.name)).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse { user_id: user.id }),
    ))
}
