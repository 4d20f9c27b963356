// src/models/user.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::question::QuestionOption;

/// All users, keyed by user ID.
pub type UserMap = BTreeMap<String, User>;

/// A quiz participant as stored in `users.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store at login. Never changes.
    pub id: String,

    pub name: String,

    /// Fraction of correct answers in [0, 1]. Only meaningful once finished.
    #[serde(default)]
    pub score: f32,

    /// Submission order. At most one answer per question.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,

    /// Flips to `true` on finish and never back.
    #[serde(default, rename = "finished_quiz")]
    pub finished: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl User {
    /// A fresh, unfinished user with no answers. The store assigns the ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            score: 0.0,
            answers: Vec::new(),
            finished: false,
            created_at: Some(Utc::now()),
            finished_at: None,
        }
    }
}

// Older snapshots store a user without answers as `"answers": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Answer>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user's choice for one question.
///
/// The option is a copy of the catalog option at the time of answering, so
/// later catalog edits do not reach stored answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub option: QuestionOption,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = validate_name))]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
}

fn validate_name(name: &str) -> Result<(), validator::ValidationError> {
    let len = name.trim().chars().count();
    if len == 0 {
        return Err(validator::ValidationError::new("name_cannot_be_empty"));
    }
    if len > 50 {
        return Err(validator::ValidationError::new("name_too_long"));
    }
    Ok(())
}
