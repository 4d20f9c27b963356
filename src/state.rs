// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    repository::{FileQuestionRepository, FileUserRepository, QuestionRepository, UserRepository},
    services::{Catalog, QuizService, ScoringService},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub quiz: QuizService,
    pub scoring: ScoringService,
}

impl AppState {
    /// Wires the services over the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        let catalog = Catalog::new(questions);
        Self {
            quiz: QuizService::new(users.clone(), catalog.clone()),
            scoring: ScoringService::new(users, catalog.clone()),
            catalog,
        }
    }

    /// JSON-file repositories at the paths named in `config`.
    pub fn from_config(config: &Config) -> Self {
        let users = Arc::new(FileUserRepository::new(&config.users_file));
        let questions = Arc::new(FileQuestionRepository::new(&config.questions_file));
        Self::new(users, questions)
    }
}

impl FromRef<AppState> for Catalog {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

impl FromRef<AppState> for QuizService {
    fn from_ref(state: &AppState) -> Self {
        state.quiz.clone()
    }
}

impl FromRef<AppState> for ScoringService {
    fn from_ref(state: &AppState) -> Self {
        state.scoring.clone()
    }
}
