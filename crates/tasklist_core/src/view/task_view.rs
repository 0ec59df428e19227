//! Task list view state machine.
//!
//! # Responsibility
//! - Own `tasks`, `draft_title` and `title_error` for one rendered list.
//! - Validate drafts, call the service, and re-fetch after each mutation.
//!
//! # Invariants
//! - Editing the draft clears `title_error`; validation runs only on submit.
//! - A failed action leaves the snapshot and the draft untouched.
//! - Declined deletes never reach the service.

use crate::model::task::{generate_task_id, is_valid_task_title, Task};
use crate::repo::task_repo::{RepoError, TaskRepository};
use crate::service::task_service::TaskService;
use crate::view::notifier::Notifier;
use crate::view::render::ViewModel;
use log::{error, info};

/// Inline message shown when a submitted draft fails validation.
pub const INVALID_TITLE_MESSAGE: &str = "Invalid title";
/// Question asked before a task is deleted.
pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure?";

/// Result of one user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The service call succeeded.
    Applied,
    /// The draft failed validation; nothing was sent to the service.
    Rejected,
    /// The user declined the confirmation prompt.
    Declined,
    /// The service call failed and the user was notified.
    Failed,
}

/// Interactive task list bound to an injected service.
pub struct TaskView<'svc, R: TaskRepository, N: Notifier> {
    service: &'svc TaskService<R>,
    notifier: N,
    tasks: Vec<Task>,
    draft_title: String,
    title_error: Option<String>,
}

impl<'svc, R: TaskRepository, N: Notifier> TaskView<'svc, R, N> {
    /// Creates an unmounted view with an empty snapshot and draft.
    pub fn new(service: &'svc TaskService<R>, notifier: N) -> Self {
        Self {
            service,
            notifier,
            tasks: Vec::new(),
            draft_title: String::new(),
            title_error: None,
        }
    }

    /// Loads the initial snapshot.
    ///
    /// On failure the snapshot keeps its previous (initially empty) value.
    pub fn mount(&mut self) -> ActionOutcome {
        self.refresh()
    }

    /// Re-fetches the full collection, replacing the snapshot on success.
    pub fn refresh(&mut self) -> ActionOutcome {
        match self.service.get_all() {
            Ok(tasks) => {
                self.tasks = tasks;
                ActionOutcome::Applied
            }
            Err(err) => {
                self.report_failure("fetch", &err);
                ActionOutcome::Failed
            }
        }
    }

    /// Replaces the draft title and forgets any inline error.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft_title = title.into();
        self.title_error = None;
    }

    /// Creates a task from the current draft.
    pub fn submit(&mut self) -> ActionOutcome {
        if !is_valid_task_title(self.draft_title.as_str()) {
            self.title_error = Some(INVALID_TITLE_MESSAGE.to_string());
            return ActionOutcome::Rejected;
        }
        self.title_error = None;

        let id = generate_task_id();
        match self.service.save(&id, self.draft_title.as_str(), false) {
            Ok(()) => {
                info!("event=task_create module=view status=ok");
                self.refresh();
                self.draft_title.clear();
                ActionOutcome::Applied
            }
            Err(err) => {
                self.report_failure("create", &err);
                ActionOutcome::Failed
            }
        }
    }

    /// Flips completion of `task`, keeping its title.
    ///
    /// The snapshot only reflects the change after the re-fetch succeeds.
    pub fn toggle(&mut self, task: &Task) -> ActionOutcome {
        let toggled = task.toggled();
        match self
            .service
            .save(&toggled.id, toggled.title.as_str(), toggled.is_done)
        {
            Ok(()) => {
                info!(
                    "event=task_toggle module=view status=ok is_done={}",
                    toggled.is_done
                );
                self.refresh();
                ActionOutcome::Applied
            }
            Err(err) => {
                self.report_failure("toggle", &err);
                ActionOutcome::Failed
            }
        }
    }

    /// Deletes `task` after the user confirms.
    pub fn delete(&mut self, task: &Task) -> ActionOutcome {
        if !self.notifier.confirm(CONFIRM_DELETE_PROMPT) {
            return ActionOutcome::Declined;
        }

        match self.service.delete(&task.id) {
            Ok(()) => {
                info!("event=task_delete module=view status=ok");
                self.refresh();
                ActionOutcome::Applied
            }
            Err(err) => {
                self.report_failure("delete", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft_title(&self) -> &str {
        self.draft_title.as_str()
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Front-ends that share their input channel with the notifier read
    /// through this accessor between interactions.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Builds the toolkit-independent description of the current screen.
    pub fn render(&self) -> ViewModel {
        ViewModel::build(&self.tasks, self.draft_title.as_str(), self.title_error())
    }

    fn report_failure(&mut self, action: &str, err: &RepoError) {
        error!("event=task_{action} module=view status=error error={err}");
        self.notifier.alert(err.to_string().as_str());
    }
}
