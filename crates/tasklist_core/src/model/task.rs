//! Task entity and pure helpers.
//!
//! # Responsibility
//! - Define the canonical persisted shape of a to-do item.
//! - Generate client-side identifiers and validate user-entered titles.
//!
//! # Invariants
//! - `id` is unique within the stored collection and never changes.
//! - `title` is validated by the caller before a task is created.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier.
///
/// Kept as a plain string so persisted ids from older blobs round-trip
/// without interpretation.
pub type TaskId = String;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Serialized as `isDone` to match the stored collection layout.
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

impl Task {
    /// Creates a task from its three fields without validation.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, is_done: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_done,
        }
    }

    /// Returns a copy with the completion flag flipped and the title unchanged.
    pub fn toggled(&self) -> Self {
        Self {
            is_done: !self.is_done,
            ..self.clone()
        }
    }
}

/// Generates a new task identifier.
///
/// Uniqueness is probabilistic (UUID v4); existing ids are not consulted.
pub fn generate_task_id() -> TaskId {
    Uuid::new_v4().to_string()
}

/// Returns whether `title` is acceptable for a new or updated task.
///
/// A title is valid iff it still has characters after trimming whitespace.
pub fn is_valid_task_title(title: &str) -> bool {
    !title.trim().is_empty()
}
