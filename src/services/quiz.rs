// src/services/quiz.rs

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::{QuizError, StorageError},
    models::{
        answer::AnsweredEntry,
        score::FinishSummary,
        user::{Answer, User},
    },
    repository::UserRepository,
    services::catalog::{Catalog, display_order},
};

/// Per-user answering state machine.
///
/// A user is in progress until `finish` succeeds, after which the record is
/// frozen: further answers and a second finish are rejected.
#[derive(Clone)]
pub struct QuizService {
    users: Arc<dyn UserRepository>,
    catalog: Catalog,
}

impl QuizService {
    pub fn new(users: Arc<dyn UserRepository>, catalog: Catalog) -> Self {
        Self { users, catalog }
    }

    /// Creates a new participant and returns the stored record.
    pub fn login(&self, name: &str) -> Result<User, StorageError> {
        let user = self.users.create_user(User::new(name.trim()))?;
        tracing::info!("user {} logged in as {:?}", user.id, user.name);
        Ok(user)
    }

    /// Records `option_id` as the user's answer to `question_id`.
    ///
    /// A previous answer to the same question is dropped and the new one goes
    /// to the end of the user's answers.
    pub fn submit_answer(
        &self,
        user_id: &str,
        question_id: &str,
        option_id: &str,
    ) -> Result<(), QuizError> {
        // The catalog is read inside the user's exclusive section so user
        // checks come first. Lock order is always users, then questions.
        self.users
            .modify_user(user_id, &mut |user: &mut User| {
                if user.finished {
                    return Err(QuizError::AlreadyFinished);
                }

                let question = self.catalog.question(question_id)?;

                let option = question
                    .option(option_id)
                    .ok_or_else(|| QuizError::InvalidOption {
                        question_id: question_id.to_string(),
                        option_id: option_id.to_string(),
                    })?;

                user.answers.retain(|a| a.question_id != question_id);
                user.answers.push(Answer {
                    question_id: question_id.to_string(),
                    option: option.clone(),
                });
                Ok(())
            })
            .inspect_err(|e| tracing::debug!("user {} answer rejected: {}", user_id, e))?;

        tracing::debug!("user {} answered {} with {}", user_id, question_id, option_id);
        Ok(())
    }

    /// Closes the quiz for the user and stores the final score.
    ///
    /// Requires one answer per catalog question. The score is the fraction of
    /// stored answers whose option was correct when it was chosen.
    pub fn finish(&self, user_id: &str) -> Result<FinishSummary, QuizError> {
        let mut total_questions = 0;

        let user = self
            .users
            .modify_user(user_id, &mut |user: &mut User| {
                if user.finished {
                    return Err(QuizError::AlreadyFinished);
                }

                total_questions = self.catalog.questions()?.len();
                let answered = user.answers.len();
                if answered != total_questions {
                    return Err(QuizError::IncompleteAnswers {
                        answered,
                        total: total_questions,
                    });
                }

                user.score = compute_score(&user.answers, total_questions);
                user.finished = true;
                user.finished_at = Some(Utc::now());
                Ok(())
            })
            .inspect_err(|e| tracing::warn!("user {} cannot finish: {}", user_id, e))?;

        let correct_answers = correct_count(&user.answers);
        tracing::info!(
            "user {} finished with {}/{} correct",
            user.id,
            correct_answers,
            total_questions
        );

        Ok(FinishSummary {
            score: user.score,
            correct_answers,
            total_questions,
        })
    }

    /// The user's answers joined with current question labels, in catalog
    /// display order. Answers to questions no longer in the catalog come last
    /// with an empty label.
    pub fn list_answered(&self, user_id: &str) -> Result<Vec<AnsweredEntry>, QuizError> {
        let user = self.users.get_user(user_id)?;
        let questions = self.catalog.questions()?;

        let mut answers: Vec<&Answer> = user.answers.iter().collect();
        answers.sort_by(|a, b| {
            let a_known = questions.contains_key(&a.question_id);
            let b_known = questions.contains_key(&b.question_id);
            b_known
                .cmp(&a_known)
                .then_with(|| display_order(&a.question_id, &b.question_id))
        });

        Ok(answers
            .into_iter()
            .map(|answer| AnsweredEntry {
                question: questions
                    .get(&answer.question_id)
                    .map(|q| q.label.clone())
                    .unwrap_or_default(),
                question_id: answer.question_id.clone(),
                option: answer.option.label.clone(),
                option_id: answer.option.id.clone(),
            })
            .collect())
    }
}

fn correct_count(answers: &[Answer]) -> usize {
    answers.iter().filter(|a| a.option.is_correct).count()
}

/// An empty catalog scores 0 rather than NaN.
fn compute_score(answers: &[Answer], total_questions: usize) -> f32 {
    if total_questions == 0 {
        return 0.0;
    }
    correct_count(answers) as f32 / total_questions as f32
}
