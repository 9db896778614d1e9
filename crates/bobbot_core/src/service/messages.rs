//! User-facing reply text.

use crate::storage::StorageError;
use crate::undo::UndoAction;

pub const WELCOME: &str = "Hello! I'm BobBot\nWhat can I do for you bobz?";
pub const GOODBYE: &str = "Bye bobz. Hope to see you again soon bobz!";

pub const ADDED: &str = "Got it bobz. I've added this task:";
pub const MARKED: &str = "Nice bobz! I've marked this task as done bobz:";
pub const UNMARKED: &str = "OK bobz, I've marked this task as not done yet bobz:";
pub const REMOVED: &str = "Noted bobz. I've removed this task bobz:";

pub const EMPTY_LIST: &str = "No items in the list bobz.";
pub const LIST_HEADER: &str = "Here are the items in your list bobz:";
pub const MATCH_HEADER: &str = "Here are the matching tasks in your list bobz:";
pub const NO_MATCHES: &str = "No matching tasks found bobz.";

pub const NOTHING_TO_UNDO: &str = "Nothing to undo bobz.";
pub const UNDO_TARGET_MISSING: &str = "BOBZ!!! The task to undo is no longer in the list bobz.";

pub const UNKNOWN_COMMAND: &str =
    "BOBZ!!! what are you saying bobz. Only use 'todo', 'deadline', 'event' and 'delete' bobz.";
pub const GENERIC_FORMAT: &str =
    "BOBZ!!!Something went wrong, please check your command format bobz.";
pub const DEADLINE_FORMAT: &str =
    "BOBZ!!! Invalid format for deadline bobz. Try: deadline <desc> /by <time>";
pub const EVENT_FORMAT: &str =
    "BOBZ!!! Invalid format for event bobz. Try: event <desc> /from <start> /to <end>";
pub const NO_SUCH_TASK: &str = "BOBZ!!! That task number does not exist.";
pub const EMPTY_DESCRIPTION: &str = "BOBZ!!! The description of a todo cannot be empty bobz.";
pub const EMPTY_KEYWORD: &str = "BOBZ!!! The search keyword cannot be empty bobz.";

pub fn task_count(count: usize) -> String {
    format!("Now you have {count} tasks in the list bobz.")
}

pub fn undone(action: UndoAction) -> String {
    let what = match action {
        UndoAction::Add => "adding",
        UndoAction::Delete => "deleting",
        UndoAction::Mark => "marking",
        UndoAction::Unmark => "unmarking",
    };
    format!("Undone bobz! I've reversed {what} this task:")
}

pub fn save_failed(err: &StorageError) -> String {
    format!("Something went wrong while saving: {err}")
}
