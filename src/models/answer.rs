// src/models/answer.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO for answering one question.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1))]
    pub question_id: String,
    #[validate(length(min = 1))]
    pub option_id: String,
}

/// One row of a user's answered questions.
///
/// `question` is the current catalog label; `option` and `option_id` come from
/// the user's stored answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredEntry {
    pub question: String,
    pub question_id: String,
    pub option: String,
    pub option_id: String,
}
