//! File-backed task store.
//!
//! # Responsibility
//! - Read and rewrite one plain-text task file at a configured path.
//!
//! # Invariants
//! - A missing file is an empty list, not an error.
//! - Writes truncate and rewrite in place; a failure mid-write can leave
//!   the file stale or truncated.

use super::codec::{LineCodec, TaskCodec};
use super::{StorageError, StorageResult, TaskStore};
use crate::model::task::Task;
use log::{error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Task store persisting through a codec to a single file.
#[derive(Debug, Clone)]
pub struct FileTaskStore<C: TaskCodec = LineCodec> {
    path: PathBuf,
    codec: C,
}

impl FileTaskStore<LineCodec> {
    /// Creates a store using the numbered render-line format.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, LineCodec)
    }
}

impl<C: TaskCodec> FileTaskStore<C> {
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<C: TaskCodec> TaskStore for FileTaskStore<C> {
    fn load(&self) -> Vec<Task> {
        let started_at = Instant::now();
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let tasks = self.codec.decode(&text);
                info!(
                    "event=task_load module=storage status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                tasks
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=task_load module=storage status=ok count=0 reason=file_missing");
                Vec::new()
            }
            Err(err) => {
                error!(
                    "event=task_load module=storage status=error error_code=read_failed error={}",
                    err
                );
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> StorageResult<()> {
        let started_at = Instant::now();
        let text = self.codec.encode(tasks);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        match std::fs::write(&self.path, text) {
            Ok(()) => {
                info!(
                    "event=task_save module=storage status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=task_save module=storage status=error error_code=write_failed duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(self.io_error(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileTaskStore;
    use crate::model::task::Task;
    use crate::storage::TaskStore;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTaskStore::new(dir.path().join("absent.txt"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_creates_parent_directory_and_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("tasks.txt");
        let store = FileTaskStore::new(&path);

        store.save(&[Task::todo("one"), Task::todo("two")]).unwrap();
        store.save(&[Task::todo("only")]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1. [T][ ] only\n");
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn save_into_file_path_parent_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = FileTaskStore::new(blocker.join("tasks.txt"));

        let err = store.save(&[Task::todo("x")]).unwrap_err();
        assert!(err.to_string().contains("tasks.txt"), "unexpected error: {err}");
    }

    #[test]
    fn unreadable_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTaskStore::new(dir.path());
        assert!(store.load().is_empty());
    }
}
