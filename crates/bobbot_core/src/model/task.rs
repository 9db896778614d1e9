//! Task domain model.
//!
//! # Responsibility
//! - Define the todo/deadline/event record shared by every core component.
//! - Own the canonical render form used for display and for storage.
//!
//! # Invariants
//! - `id` is generated per task instance and never reused; two tasks with
//!   identical fields are still distinct entries.
//! - `render()` is a pure function of `description`, `done` and the payload.
//! - Ids are process-local and are not part of the render form.

use crate::model::when::When;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identity of one task instance for the lifetime of the process.
pub type TaskId = Uuid;

/// Discriminant of a task, used for labels and render prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    /// Single-letter tag rendered inside the first bracket pair.
    pub fn letter(self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Inverse of [`TaskKind::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Self::Todo),
            'D' => Some(Self::Deadline),
            'E' => Some(Self::Event),
            _ => None,
        }
    }

    /// Lowercase label used in logs and transport payloads.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }
}

/// Kind-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskDetail {
    Todo,
    Deadline { due: When },
    Event { start: When, end: When },
}

/// Validation errors for task construction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Process-local identity; regenerated when a list is loaded.
    pub id: TaskId,
    pub description: String,
    pub done: bool,
    #[serde(flatten)]
    pub detail: TaskDetail,
}

impl Task {
    fn with_detail(description: impl Into<String>, detail: TaskDetail) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            done: false,
            detail,
        }
    }

    /// Creates a plain todo.
    pub fn todo(description: impl Into<String>) -> Self {
        Self::with_detail(description, TaskDetail::Todo)
    }

    /// Creates a deadline; `due` goes through the deadline date grammar.
    pub fn deadline(description: impl Into<String>, due: &str) -> Self {
        Self::with_detail(
            description,
            TaskDetail::Deadline {
                due: When::parse_date(due),
            },
        )
    }

    /// Creates an event; both ends go through the event date-time grammar.
    pub fn event(description: impl Into<String>, start: &str, end: &str) -> Self {
        Self::with_detail(
            description,
            TaskDetail::Event {
                start: When::parse_date_time(start),
                end: When::parse_date_time(end),
            },
        )
    }

    pub fn kind(&self) -> TaskKind {
        match self.detail {
            TaskDetail::Todo => TaskKind::Todo,
            TaskDetail::Deadline { .. } => TaskKind::Deadline,
            TaskDetail::Event { .. } => TaskKind::Event,
        }
    }

    /// Checks creation-time invariants.
    ///
    /// # Errors
    /// - [`TaskValidationError::EmptyDescription`] for blank descriptions.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Idempotent.
    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// Compares everything except identity.
    pub fn same_content(&self, other: &Self) -> bool {
        self.description == other.description
            && self.done == other.done
            && self.detail == other.detail
    }

    /// Renders the canonical form, e.g. `[D][X] return book (by: Jan 01 2025)`.
    pub fn render(&self) -> String {
        let marker = if self.done { 'X' } else { ' ' };
        let head = format!("[{}][{}] {}", self.kind().letter(), marker, self.description);
        match &self.detail {
            TaskDetail::Todo => head,
            TaskDetail::Deadline { due } => format!("{head} (by: {due})"),
            TaskDetail::Event { start, end } => format!("{head} (from: {start} to: {end})"),
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
