// src/error.rs

use std::{fmt, path::PathBuf};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure reading or writing a persisted collection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json in {}: {source}", path.display())]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the quiz core.
///
/// State and input errors are always detected before anything is written.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("question {0} not found")]
    QuestionNotFound(String),

    #[error("user has already finished the quiz")]
    AlreadyFinished,

    #[error("missing questions to answer before finishing ({answered} of {total} answered)")]
    IncompleteAnswers { answered: usize, total: usize },

    #[error("user has not finished the quiz")]
    NotFinished,

    #[error("option {option_id} is not valid for question {question_id}")]
    InvalidOption {
        question_id: String,
        option_id: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden (quiz state does not allow the operation)
    Forbidden(String),

    // 404 Not Found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Maps core errors onto HTTP semantics.
/// Storage details stay in the log; the client only sees an opaque 500.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::UserNotFound(_) | QuizError::QuestionNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            QuizError::AlreadyFinished
            | QuizError::IncompleteAnswers { .. }
            | QuizError::NotFinished => AppError::Forbidden(err.to_string()),
            QuizError::InvalidOption { .. } => AppError::BadRequest(err.to_string()),
            QuizError::Storage(e) => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Any body that fails to decode is a 400, including well-formed JSON of the
/// wrong shape (which axum would otherwise answer with 422).
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
