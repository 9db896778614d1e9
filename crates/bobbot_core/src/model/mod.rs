//! Task domain model.
//!
//! # Responsibility
//! - Define the task variants and the date values they carry.
//! - Keep rendering next to the data so display and storage agree.
//!
//! # Invariants
//! - Every task instance has its own `TaskId`.
//! - The render form is the only external representation of a task.

pub mod task;
pub mod when;
