//! Core domain logic for the task list.
//! Model, persistence, service and view layers, wired by explicit injection.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{
    default_log_level, flush_logging, init_logging, init_stderr_logging, logging_status,
    LoggingError,
};
pub use model::task::{generate_task_id, is_valid_task_title, Task, TaskId};
pub use repo::task_repo::{
    KeyValueTaskRepository, RepoError, RepoResult, TaskRepository, DEFAULT_TASKS_KEY,
};
pub use service::task_service::TaskService;
pub use store::sqlite_store::SqliteKeyValueStore;
pub use store::{KeyValueStore, StoreError, StoreResult};
pub use view::notifier::Notifier;
pub use view::render::{TaskRow, ViewModel};
pub use view::task_view::{ActionOutcome, TaskView, CONFIRM_DELETE_PROMPT, INVALID_TITLE_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
