//! Single-step undo log.
//!
//! # Responsibility
//! - Remember the inverse of the most recent successful mutation.
//! - Apply that inverse to the task list exactly once.
//!
//! # Invariants
//! - At most one entry exists; recording overwrites it.
//! - Undo consumes the entry whether or not its target still exists.
//! - Add/Mark/Unmark refer to tasks by `TaskId`; Delete owns the removed
//!   task until it is reinserted.

use crate::model::task::{Task, TaskId};
use crate::repo::task_list::TaskList;
use log::{info, warn};
use serde::Serialize;

/// Kind of mutation an entry reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoAction {
    Add,
    Delete,
    Mark,
    Unmark,
}

impl UndoAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
        }
    }
}

/// Captured inverse of one mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoEntry {
    /// A task was appended; undo removes it by identity.
    Add(TaskId),
    /// A task was removed from `index`; undo reinserts it there.
    Delete { task: Task, index: usize },
    /// A task was marked done; undo clears the flag.
    Mark(TaskId),
    /// A task was marked not done; undo sets the flag.
    Unmark(TaskId),
}

impl UndoEntry {
    pub fn action(&self) -> UndoAction {
        match self {
            Self::Add(_) => UndoAction::Add,
            Self::Delete { .. } => UndoAction::Delete,
            Self::Mark(_) => UndoAction::Mark,
            Self::Unmark(_) => UndoAction::Unmark,
        }
    }
}

/// Result of one undo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// No entry was recorded; nothing changed.
    NothingToUndo,
    /// The entry was applied; `task` is a snapshot after reversal.
    Reverted { action: UndoAction, task: Task },
    /// The entry referred to a task no longer in the list; it was dropped.
    TargetMissing(UndoAction),
}

impl UndoOutcome {
    /// Returns whether the list was changed.
    pub fn changed_list(&self) -> bool {
        matches!(self, Self::Reverted { .. })
    }
}

/// Holds zero or one [`UndoEntry`].
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entry: Option<UndoEntry>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the current entry.
    pub fn record(&mut self, entry: UndoEntry) {
        self.entry = Some(entry);
    }

    pub fn peek(&self) -> Option<&UndoEntry> {
        self.entry.as_ref()
    }

    pub fn take(&mut self) -> Option<UndoEntry> {
        self.entry.take()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Reverses the recorded mutation against `list`.
    pub fn undo(&mut self, list: &mut TaskList) -> UndoOutcome {
        let Some(entry) = self.take() else {
            return UndoOutcome::NothingToUndo;
        };
        let action = entry.action();

        let reverted = match entry {
            UndoEntry::Add(id) => list.remove_by_id(id),
            UndoEntry::Delete { task, index } => {
                let position = list.insert(index, task);
                list.get(position).ok().cloned()
            }
            UndoEntry::Mark(id) => list.find_by_id_mut(id).map(|task| {
                task.mark_not_done();
                task.clone()
            }),
            UndoEntry::Unmark(id) => list.find_by_id_mut(id).map(|task| {
                task.mark_done();
                task.clone()
            }),
        };

        match reverted {
            Some(task) => {
                info!(
                    "event=undo module=undo status=ok action={} size={}",
                    action.label(),
                    list.len()
                );
                UndoOutcome::Reverted { action, task }
            }
            None => {
                warn!(
                    "event=undo module=undo status=skip action={} reason=target_missing",
                    action.label()
                );
                UndoOutcome::TargetMissing(action)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UndoAction, UndoEntry, UndoLog, UndoOutcome};
    use crate::model::task::Task;
    use crate::repo::task_list::TaskList;

    #[test]
    fn empty_log_reports_nothing_to_undo() {
        let mut log = UndoLog::new();
        let mut list = TaskList::from_tasks(vec![Task::todo("a")]);
        assert_eq!(log.undo(&mut list), UndoOutcome::NothingToUndo);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn record_overwrites_previous_entry() {
        let mut log = UndoLog::new();
        let task = Task::todo("a");
        log.record(UndoEntry::Add(task.id));
        log.record(UndoEntry::Mark(task.id));
        assert_eq!(log.peek().map(UndoEntry::action), Some(UndoAction::Mark));
    }

    #[test]
    fn undo_add_removes_by_identity() {
        let original = Task::todo("same");
        let added = Task::todo("same");
        let added_id = added.id;
        let mut list = TaskList::from_tasks(vec![original.clone(), added]);
        let mut log = UndoLog::new();
        log.record(UndoEntry::Add(added_id));

        let outcome = log.undo(&mut list);
        assert!(outcome.changed_list());
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, original.id);
        assert!(log.is_empty());
    }

    #[test]
    fn undo_delete_reinserts_at_original_index() {
        let mut list = TaskList::from_tasks(vec![
            Task::todo("a"),
            Task::todo("b"),
            Task::todo("c"),
        ]);
        let before = list.tasks().to_vec();
        let removed = list.delete(1).unwrap();
        let mut log = UndoLog::new();
        log.record(UndoEntry::Delete {
            task: removed,
            index: 1,
        });

        log.undo(&mut list);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn undo_mark_and_unmark_flip_only_target() {
        let mut list = TaskList::from_tasks(vec![Task::todo("a"), Task::todo("b")]);
        let target = list.get(1).unwrap().id;
        list.get_mut(1).unwrap().mark_done();
        let mut log = UndoLog::new();

        log.record(UndoEntry::Mark(target));
        log.undo(&mut list);
        assert!(!list.get(1).unwrap().done);
        assert!(!list.get(0).unwrap().done);

        log.record(UndoEntry::Unmark(target));
        let outcome = log.undo(&mut list);
        assert!(list.get(1).unwrap().done);
        assert!(matches!(
            outcome,
            UndoOutcome::Reverted {
                action: UndoAction::Unmark,
                ..
            }
        ));
    }

    #[test]
    fn missing_target_consumes_entry() {
        let mut list = TaskList::new();
        let mut log = UndoLog::new();
        log.record(UndoEntry::Mark(Task::todo("gone").id));

        assert_eq!(log.undo(&mut list), UndoOutcome::TargetMissing(UndoAction::Mark));
        assert_eq!(log.undo(&mut list), UndoOutcome::NothingToUndo);
    }
}
