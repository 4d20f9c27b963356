// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::run_blocking,
    models::answer::AnswerRequest,
    services::{QuizService, ScoringService},
};

/// Answers one question for the user.
///
/// Re-answering a question replaces the previous choice.
/// Rejected with 403 once the user has finished.
pub async fn answer_question(
    State(quiz): State<QuizService>,
    Path(user_id): Path<String>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    run_blocking(move || quiz.submit_answer(&user_id, &req.question_id, &req.option_id)).await?;

    Ok(StatusCode::OK)
}

/// Lists the user's answers with the question labels, in catalog order.
pub async fn get_answered(
    State(quiz): State<QuizService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let answered = run_blocking(move || quiz.list_answered(&user_id)).await?;
    Ok(Json(answered))
}

/// Finishes the quiz and stores the score.
///
/// * Every question must be answered (403 otherwise).
/// * A user can finish only once (403 on repeat).
pub async fn finish_quiz(
    State(quiz): State<QuizService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = run_blocking(move || quiz.finish(&user_id)).await?;

    Ok(Json(json!({
        "message": "Quiz completed successfully!",
        "score": summary.score,
        "correct_answers": summary.correct_answers,
        "total_questions": summary.total_questions,
    })))
}

/// Retrieves the score of a finished user compared against other finishers.
pub async fn get_score(
    State(scoring): State<ScoringService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let score = run_blocking(move || scoring.get_score_data(&user_id)).await?;
    Ok(Json(score))
}
