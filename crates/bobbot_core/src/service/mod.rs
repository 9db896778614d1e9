//! Command dispatch service.
//!
//! # Responsibility
//! - Define the command → effect contract shared by CLI and UI callers.
//! - Keep callers decoupled from list, undo and storage details.

pub mod bot_service;
pub mod messages;
