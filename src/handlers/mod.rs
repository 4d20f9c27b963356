// src/handlers/mod.rs

pub mod auth;
pub mod question;
pub mod quiz;

use crate::error::AppError;

/// Runs a synchronous core operation on the blocking pool.
///
/// Store operations do file I/O under a lock and must not stall the async
/// workers.
pub(crate) async fn run_blocking<T, E, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::InternalServerError(format!("blocking task failed: {e}")))?
        .map_err(Into::into)
}
