// src/services/catalog.rs

use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

use crate::{
    error::{QuizError, StorageError},
    models::question::{PublicQuestion, Question, QuestionMap},
    repository::QuestionRepository,
};

/// Read accessor over the question collection.
#[derive(Clone)]
pub struct Catalog {
    repo: Arc<dyn QuestionRepository>,
}

impl Catalog {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }

    /// Every question, correctness flags included.
    pub fn questions(&self) -> Result<QuestionMap, StorageError> {
        self.repo.get_all_questions()
    }

    pub fn question(&self, id: &str) -> Result<Question, QuizError> {
        self.repo.get_question(id)
    }

    /// Every question without correctness flags.
    pub fn list_public(&self) -> Result<BTreeMap<String, PublicQuestion>, StorageError> {
        let questions = self.questions()?;
        Ok(questions
            .iter()
            .map(|(id, q)| (id.clone(), PublicQuestion::from(q)))
            .collect())
    }

    pub fn get_public(&self, id: &str) -> Result<PublicQuestion, QuizError> {
        self.question(id).map(|q| PublicQuestion::from(&q))
    }
}

/// Display order of question IDs.
///
/// IDs are opaque keys. Numeric IDs sort by value and come first, anything
/// else follows in lexical order.
pub fn display_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
