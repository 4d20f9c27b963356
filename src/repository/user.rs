// src/repository/user.rs

use std::path::PathBuf;

use crate::{
    error::{QuizError, StorageError},
    models::user::{User, UserMap},
    repository::{UserRepository, json_file::JsonFile},
};

/// Users persisted as one JSON object keyed by user ID.
#[derive(Debug)]
pub struct FileUserRepository {
    file: JsonFile<UserMap>,
}

impl FileUserRepository {
    /// A missing or empty file is treated as "no users yet".
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::open_or_empty(path),
        }
    }

    fn log_failure<E: std::fmt::Display>(&self, op: &str, err: &E) {
        tracing::error!(path = %self.file.path().display(), "{}: {}", op, err);
    }
}

impl UserRepository for FileUserRepository {
    fn create_user(&self, mut user: User) -> Result<User, StorageError> {
        // The ID is derived from the snapshot size, so the read and the write
        // must happen under the same exclusive lock.
        self.file
            .update(|users| {
                let id = (users.len() + 1).to_string();
                user.id = id.clone();
                users.insert(id, user.clone());
                Ok::<_, StorageError>(user)
            })
            .inspect_err(|e| self.log_failure("creating user", e))
    }

    fn get_user(&self, id: &str) -> Result<User, QuizError> {
        let mut users = self
            .file
            .read()
            .inspect_err(|e| self.log_failure("getting user", e))?;

        users.remove(id).ok_or_else(|| {
            tracing::debug!("user {} not found", id);
            QuizError::UserNotFound(id.to_string())
        })
    }

    fn get_all_users(&self) -> Result<UserMap, StorageError> {
        self.file
            .read()
            .inspect_err(|e| self.log_failure("getting all users", e))
    }

    fn update_user(&self, user: &User) -> Result<(), StorageError> {
        self.file
            .update(|users| {
                users.insert(user.id.clone(), user.clone());
                Ok::<_, StorageError>(())
            })
            .inspect_err(|e| self.log_failure("updating user", e))
    }

    fn modify_user(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut User) -> Result<(), QuizError>,
    ) -> Result<User, QuizError> {
        self.file
            .update(|users| {
                let user = users
                    .get_mut(id)
                    .ok_or_else(|| QuizError::UserNotFound(id.to_string()))?;
                f(user)?;
                Ok(user.clone())
            })
            .inspect_err(|e| {
                if let QuizError::Storage(e) = e {
                    self.log_failure("updating user", e);
                }
            })
    }
}
