//! Task use-case service.
//!
//! # Responsibility
//! - Provide the `get_all` / `save` / `delete` entry points used by views.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass the repository.
//! - Titles are not re-validated here; callers validate before `save`.
//! - Repository errors are returned unchanged.

use crate::model::task::Task;
use crate::repo::task_repo::{RepoResult, TaskRepository};

/// Use-case service wrapper for task list operations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored task in storage order.
    pub fn get_all(&self) -> RepoResult<Vec<Task>> {
        self.repo.get_all()
    }

    /// Inserts or replaces the task keyed by `id`.
    ///
    /// # Contract
    /// - Builds the task from the three fields as given.
    /// - Existing tasks keep their position in the collection.
    pub fn save(&self, id: &str, title: &str, is_done: bool) -> RepoResult<()> {
        let task = Task::new(id, title, is_done);
        self.repo.save(&task)
    }

    /// Removes the task keyed by `id`; absent ids are not an error.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
