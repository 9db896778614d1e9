//! Single-line command interpreter.
//!
//! # Responsibility
//! - Turn one raw input line into a typed [`Command`] with positional args.
//! - Leave argument validation (numbers, emptiness, counts) to the dispatcher.
//!
//! # Invariants
//! - Parsing never fails; unknown input becomes `CommandKind::Invalid`.
//! - The input line is trimmed exactly once before matching.

pub mod command;

pub use command::{parse, Command, CommandKind};
