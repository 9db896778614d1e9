//! Task list ownership.
//!
//! # Responsibility
//! - Hold the single live copy of every task.
//! - Expose bounds-checked mutation used by the dispatcher and undo log.
//!
//! # Invariants
//! - Other components never keep their own live task references; they
//!   address tasks by position or `TaskId` through this module.

pub mod task_list;
