//! Rendering contract for the task list.
//!
//! # Invariants
//! - An empty snapshot renders the placeholder instead of rows.
//! - Completed titles are flagged for strikethrough presentation.

use crate::model::task::Task;

pub const HEADING: &str = "Task View";
pub const EMPTY_PLACEHOLDER: &str = "No tasks";
pub const DONE_MARKER: &str = "🟢";
pub const OPEN_MARKER: &str = "⚪";
pub const DELETE_MARKER: &str = "🗑️";

const STRIKE_ON: &str = "\u{1b}[9m";
const STRIKE_OFF: &str = "\u{1b}[29m";

/// One rendered task row with its toggle and delete controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub strikethrough: bool,
    pub toggle_marker: &'static str,
    pub delete_marker: &'static str,
}

/// Everything a front-end must draw for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: &'static str,
    /// `Some` only when there are no rows.
    pub placeholder: Option<&'static str>,
    pub rows: Vec<TaskRow>,
    pub draft_title: String,
    pub title_error: Option<String>,
}

impl ViewModel {
    pub fn build(tasks: &[Task], draft_title: &str, title_error: Option<&str>) -> Self {
        let rows: Vec<TaskRow> = tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id.clone(),
                title: task.title.clone(),
                strikethrough: task.is_done,
                toggle_marker: if task.is_done { DONE_MARKER } else { OPEN_MARKER },
                delete_marker: DELETE_MARKER,
            })
            .collect();

        Self {
            heading: HEADING,
            placeholder: rows.is_empty().then_some(EMPTY_PLACEHOLDER),
            rows,
            draft_title: draft_title.to_string(),
            title_error: title_error.map(str::to_string),
        }
    }

    /// Renders the frame as terminal text, numbering rows from 1.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.heading.to_string()];

        if let Some(placeholder) = self.placeholder {
            lines.push(placeholder.to_string());
        }
        for (index, row) in self.rows.iter().enumerate() {
            let title = if row.strikethrough {
                format!("{STRIKE_ON}{}{STRIKE_OFF}", row.title)
            } else {
                row.title.clone()
            };
            lines.push(format!(
                "{:>3}. {} {} {}",
                index + 1,
                row.toggle_marker,
                title,
                row.delete_marker
            ));
        }

        lines.push(format!("> {}", self.draft_title));
        if let Some(error) = &self.title_error {
            lines.push(error.clone());
        }

        lines.join("\n")
    }
}
