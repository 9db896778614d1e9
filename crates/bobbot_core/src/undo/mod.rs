//! Undo support for the most recent mutating command.
//!
//! # Invariants
//! - Only one step is remembered; there is no redo.

mod undo_log;

pub use undo_log::{UndoAction, UndoEntry, UndoLog, UndoOutcome};
