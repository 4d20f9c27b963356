// src/models/question.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole catalog, keyed by question ID.
pub type QuestionMap = BTreeMap<String, Question>;

/// A catalog question as stored in `questions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Display text of the question.
    pub label: String,

    /// Options in display order.
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Looks up an option by its ID (unique within the question).
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// A selectable option. More than one option of a question may be correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// DTO for sending a question to the client (excludes correctness flags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub label: String,
    pub options: Vec<PublicOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicOption {
    pub id: String,
    pub label: String,
}

impl From<&Question> for PublicQuestion {
    fn from(question: &Question) -> Self {
        Self {
            label: question.label.clone(),
            options: question
                .options
                .iter()
                .map(|o| PublicOption {
                    id: o.id.clone(),
                    label: o.label.clone(),
                })
                .collect(),
        }
    }
}
