// src/services/scoring.rs

use std::sync::Arc;

use crate::{
    error::QuizError,
    models::{
        score::{AnswerDetail, ScoreData},
        user::{User, UserMap},
    },
    repository::UserRepository,
    services::catalog::Catalog,
};

/// Where a finisher stands among the other finishers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub better_than: f32,
    pub average_score: f32,
    pub relative_performance: f32,
}

/// Ranks `user` against every other user in `users` that has finished.
///
/// With no other finishers every figure is 0. A zero average also yields a
/// relative performance of 0 instead of an infinite ratio.
pub fn rank(user: &User, users: &UserMap) -> Ranking {
    let others: Vec<f32> = users
        .values()
        .filter(|other| other.id != user.id && other.finished)
        .map(|other| other.score)
        .collect();

    if others.is_empty() {
        return Ranking {
            better_than: 0.0,
            average_score: 0.0,
            relative_performance: 0.0,
        };
    }

    let count = others.len() as f32;
    let lower = others.iter().filter(|&&score| score < user.score).count();
    let average_score = others.iter().sum::<f32>() / count;

    let relative_performance = if average_score == 0.0 {
        0.0
    } else {
        (user.score - average_score) / average_score
    };

    Ranking {
        better_than: lower as f32 / count,
        average_score,
        relative_performance,
    }
}

#[derive(Clone)]
pub struct ScoringService {
    users: Arc<dyn UserRepository>,
    catalog: Catalog,
}

impl ScoringService {
    pub fn new(users: Arc<dyn UserRepository>, catalog: Catalog) -> Self {
        Self { users, catalog }
    }

    /// Builds the score report of a finished user.
    pub fn get_score_data(&self, user_id: &str) -> Result<ScoreData, QuizError> {
        let users = self.users.get_all_users()?;

        let user = users
            .get(user_id)
            .ok_or_else(|| QuizError::UserNotFound(user_id.to_string()))?;
        if !user.finished {
            return Err(QuizError::NotFinished);
        }

        let questions = self.catalog.questions()?;
        let total_questions = questions.len();
        let ranking = rank(user, &users);

        let answers_detail = user
            .answers
            .iter()
            .map(|answer| AnswerDetail {
                question: questions
                    .get(&answer.question_id)
                    .map(|q| q.label.clone())
                    .unwrap_or_default(),
                answer: answer.option.label.clone(),
                is_correct: answer.option.is_correct,
            })
            .collect();

        Ok(ScoreData {
            score: user.score,
            total_questions,
            correct_answers: (user.score * total_questions as f32).round() as usize,
            better_than: ranking.better_than,
            relative_performance: ranking.relative_performance,
            answers_detail,
        })
    }
}
