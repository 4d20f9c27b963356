// src/repository/question.rs

use std::path::PathBuf;

use crate::{
    error::{QuizError, StorageError},
    models::question::{Question, QuestionMap},
    repository::{QuestionRepository, json_file::JsonFile},
};

/// The catalog file. Populated at deployment time and never written here.
#[derive(Debug)]
pub struct FileQuestionRepository {
    file: JsonFile<QuestionMap>,
}

impl FileQuestionRepository {
    /// The file must exist; a missing catalog is a storage error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::open(path),
        }
    }
}

impl QuestionRepository for FileQuestionRepository {
    fn get_all_questions(&self) -> Result<QuestionMap, StorageError> {
        self.file.read().inspect_err(|e| {
            tracing::error!(path = %self.file.path().display(), "getting questions: {}", e);
        })
    }

    fn get_question(&self, id: &str) -> Result<Question, QuizError> {
        let mut questions = self.get_all_questions()?;

        questions.remove(id).ok_or_else(|| {
            tracing::debug!("question {} not found", id);
            QuizError::QuestionNotFound(id.to_string())
        })
    }
}
