// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, handlers::run_blocking, services::Catalog};

/// Lists every question keyed by ID. Correct answers are not included.
pub async fn list_questions(State(catalog): State<Catalog>) -> Result<impl IntoResponse, AppError> {
    let questions = run_blocking(move || catalog.list_public()).await?;
    Ok(Json(questions))
}

/// Retrieves a single question by ID.
pub async fn get_question(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question = run_blocking(move || catalog.get_public(&id)).await?;
    Ok(Json(question))
}
