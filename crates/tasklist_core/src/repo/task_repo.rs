//! Task repository contract and key/value implementation.
//!
//! # Responsibility
//! - Persist the full ordered task collection as one JSON blob.
//! - Provide upsert and delete-by-id over that collection.
//!
//! # Invariants
//! - Every mutation is one read of the blob followed by one write.
//! - Upsert keeps the position of an existing task; new tasks are appended.
//! - An absent key reads as an empty collection.

use crate::model::task::Task;
use crate::store::{KeyValueStore, StoreError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known key holding the serialized task collection.
pub const DEFAULT_TASKS_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for the task collection.
pub trait TaskRepository {
    fn get_all(&self) -> RepoResult<Vec<Task>>;
    fn save(&self, task: &Task) -> RepoResult<()>;
    fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Task repository storing the whole collection under a single store key.
pub struct KeyValueTaskRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueTaskRepository<S> {
    /// Creates a repository using `DEFAULT_TASKS_KEY`.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_TASKS_KEY)
    }

    /// Creates a repository persisting under a caller-chosen key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    fn write_all(&self, tasks: &[Task]) -> RepoResult<()> {
        let blob = serde_json::to_string(tasks)
            .map_err(|err| RepoError::InvalidData(format!("failed to encode tasks: {err}")))?;
        self.store.set(self.key.as_str(), blob.as_str())?;
        debug!(
            "event=tasks_write module=repo status=ok key={} count={}",
            self.key,
            tasks.len()
        );
        Ok(())
    }
}

impl<S: KeyValueStore> TaskRepository for KeyValueTaskRepository<S> {
    fn get_all(&self) -> RepoResult<Vec<Task>> {
        let Some(blob) = self.store.get(self.key.as_str())? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(blob.as_str()).map_err(|err| {
            RepoError::InvalidData(format!("cannot decode value under key `{}`: {err}", self.key))
        })
    }

    fn save(&self, task: &Task) -> RepoResult<()> {
        let mut tasks = self.get_all()?;
        match tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task.clone(),
            None => tasks.push(task.clone()),
        }
        self.write_all(&tasks)
    }

    fn delete(&self, id: &str) -> RepoResult<()> {
        let mut tasks = self.get_all()?;
        tasks.retain(|task| task.id != id);
        self.write_all(&tasks)
    }
}
