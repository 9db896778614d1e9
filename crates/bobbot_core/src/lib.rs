//! Core logic for BobBot, a command-driven personal task tracker.
//! This crate is the single source of truth for task, list and undo invariants;
//! line and UI front ends only pass strings in and print strings out.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod service;
pub mod storage;
pub mod undo;

pub use config::BotConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{Task, TaskDetail, TaskId, TaskKind, TaskValidationError};
pub use model::when::When;
pub use parser::{parse, Command, CommandKind};
pub use repo::task_list::{IndexError, TaskList};
pub use service::bot_service::{BotService, CommandError, FormatError, Reply};
pub use storage::{
    FileTaskStore, LineCodec, MemoryTaskStore, StorageError, StorageResult, TaskCodec, TaskStore,
};
pub use undo::{UndoAction, UndoEntry, UndoLog, UndoOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
