// src/models/score.rs

use serde::{Deserialize, Serialize};

/// Result of finishing the quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishSummary {
    pub score: f32,
    pub correct_answers: usize,
    pub total_questions: usize,
}

/// A finisher's score compared against every other finisher.
///
/// All ratios are fractions; rendering them as percentages is up to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreData {
    pub score: f32,
    pub total_questions: usize,
    pub correct_answers: usize,

    /// Share of other finishers with a strictly lower score.
    pub better_than: f32,

    /// Deviation from the other finishers' mean score, relative to that mean.
    /// May be negative.
    pub relative_performance: f32,

    pub answers_detail: Vec<AnswerDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDetail {
    pub question: String,
    pub answer: String,
    pub is_correct: bool,
}
