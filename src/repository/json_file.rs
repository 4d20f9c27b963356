// src/repository/json_file.rs

use std::{
    fs, io,
    marker::PhantomData,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;

/// A whole-collection JSON snapshot on disk, guarded by a read/write lock.
///
/// Nothing is cached: every call re-reads the file. Reads hold the shared lock
/// for load + lookup; `update` holds the exclusive lock across
/// load + mutate + persist, so one update is atomic relative to every other
/// operation on the same file.
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    missing_is_empty: bool,
    // The file is the state. The lock only serializes access to it.
    lock: RwLock<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// A collection that must exist on disk before it is read.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path.into(), false)
    }

    /// A collection where a missing or empty file reads as empty.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path.into(), true)
    }

    fn with_policy(path: PathBuf, missing_is_empty: bool) -> Self {
        Self {
            path,
            missing_is_empty,
            lock: RwLock::new(()),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current snapshot under the shared lock.
    pub fn read(&self) -> Result<T, StorageError> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        self.load()
    }

    /// Loads, mutates and persists the snapshot under the exclusive lock.
    ///
    /// If `f` fails nothing is written.
    pub fn update<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StorageError>,
    {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let mut data = self.load()?;
        let out = f(&mut data)?;
        self.save(&data)?;
        Ok(out)
    }

    fn load(&self) -> Result<T, StorageError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.missing_is_empty => {
                return Ok(T::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        if self.missing_is_empty && content.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(&content).map_err(|source| StorageError::Serde {
            path: self.path.clone(),
            source,
        })
    }

    // Written to a sibling file first and renamed over the target so readers
    // never observe a half-written snapshot.
    fn save(&self, data: &T) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(data).map_err(|source| StorageError::Serde {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
