//! In-memory task list engine.
//!
//! # Responsibility
//! - Own the ordered task sequence and every mutation applied to it.
//! - Provide bounds-checked positional access and identity lookups.
//!
//! # Invariants
//! - Insertion order is the only ordering; nothing reorders implicitly.
//! - Positions are 0-based here; 1-based numbering belongs to callers.

use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, IndexError>;

/// Requested position is outside `[0, len)`.
///
/// `index` is signed so callers converting user numbers can report
/// positions below zero with the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: i64,
    pub len: usize,
}

impl IndexError {
    fn at(index: usize, len: usize) -> Self {
        Self {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task index {} out of range for list of {}",
            self.index, self.len
        )
    }
}

impl Error for IndexError {}

/// Ordered task collection.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already loaded sequence, keeping its order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends one task.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Inserts at `index`, clamped to the end of the list.
    ///
    /// Returns the position the task actually landed at.
    pub fn insert(&mut self, index: usize, task: Task) -> usize {
        let position = index.min(self.tasks.len());
        self.tasks.insert(position, task);
        position
    }

    /// # Errors
    /// - [`IndexError`] when `index >= len`.
    pub fn get(&self, index: usize) -> ListResult<&Task> {
        let len = self.tasks.len();
        self.tasks.get(index).ok_or(IndexError::at(index, len))
    }

    /// # Errors
    /// - [`IndexError`] when `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut Task> {
        let len = self.tasks.len();
        self.tasks.get_mut(index).ok_or(IndexError::at(index, len))
    }

    /// Removes and returns the task at `index`, shifting later tasks down.
    ///
    /// # Errors
    /// - [`IndexError`] when `index >= len`.
    pub fn delete(&mut self, index: usize) -> ListResult<Task> {
        if index >= self.tasks.len() {
            return Err(IndexError::at(index, self.tasks.len()));
        }
        Ok(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current position of the task with `id`.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Removes the task with `id` wherever it currently is.
    pub fn remove_by_id(&mut self, id: TaskId) -> Option<Task> {
        let position = self.position_of(id)?;
        Some(self.tasks.remove(position))
    }

    /// Case-insensitive substring search over descriptions only.
    ///
    /// Matches keep their relative order; the list is not modified.
    pub fn find_by_keyword(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.description.to_lowercase().contains(&needle))
            .collect()
    }
}
