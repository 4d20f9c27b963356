// src/repository/mod.rs

pub mod json_file;
pub mod question;
pub mod user;

use crate::{
    error::{QuizError, StorageError},
    models::{
        question::{Question, QuestionMap},
        user::{User, UserMap},
    },
};

pub use question::FileQuestionRepository;
pub use user::FileUserRepository;

/// Durable store of quiz participants.
///
/// Every write must be atomic relative to every other operation on the same
/// collection, including the read that precedes it.
pub trait UserRepository: Send + Sync {
    /// Stores `user` under a freshly assigned ID and returns the stored record.
    fn create_user(&self, user: User) -> Result<User, StorageError>;

    fn get_user(&self, id: &str) -> Result<User, QuizError>;

    fn get_all_users(&self) -> Result<UserMap, StorageError>;

    /// Replaces the stored record for `user.id`.
    fn update_user(&self, user: &User) -> Result<(), StorageError>;

    /// Loads the user, applies `f` and persists the result as one atomic step.
    /// Nothing is written if `f` fails.
    fn modify_user(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut User) -> Result<(), QuizError>,
    ) -> Result<User, QuizError>;
}

/// Read-only access to the question catalog.
pub trait QuestionRepository: Send + Sync {
    fn get_all_questions(&self) -> Result<QuestionMap, StorageError>;

    fn get_question(&self, id: &str) -> Result<Question, QuizError>;
}
