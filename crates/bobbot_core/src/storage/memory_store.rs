//! In-memory task store for UI embedding and tests.

use super::codec::{LineCodec, TaskCodec};
use super::{StorageResult, TaskStore};
use crate::model::task::Task;
use std::cell::RefCell;

/// Keeps the encoded text in memory instead of on disk.
///
/// Goes through the same codec as the file store, so loaded tasks behave
/// exactly like tasks read back from a file.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    text: RefCell<String>,
    codec: LineCodec,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from previously encoded text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            codec: LineCodec,
        }
    }

    /// Returns the last saved text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> Vec<Task> {
        self.codec.decode(&self.text.borrow())
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        *self.text.borrow_mut() = self.codec.encode(tasks);
        Ok(())
    }
}
