//! Task list persistence.
//!
//! # Responsibility
//! - Define the store seam used by the dispatcher (`TaskStore`).
//! - Keep the on-disk text format behind the `TaskCodec` boundary.
//!
//! # Invariants
//! - Loading never fails; unreadable or missing data yields an empty list.
//! - Every save rewrites the whole target; there is no append mode.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod codec;
mod file_store;
mod memory_store;

pub use codec::{LineCodec, TaskCodec};
pub use file_store::FileTaskStore;
pub use memory_store::MemoryTaskStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failures surfaced to callers.
#[derive(Debug)]
pub enum StorageError {
    /// File system failure while writing the task file.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Store refused the write for a non-I/O reason.
    Rejected(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Rejected(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Rejected(_) => None,
        }
    }
}

/// Whole-list load/save contract.
pub trait TaskStore {
    /// Loads every decodable task; never fails.
    fn load(&self) -> Vec<Task>;

    /// Replaces stored state with `tasks`.
    fn save(&self, tasks: &[Task]) -> StorageResult<()>;
}
