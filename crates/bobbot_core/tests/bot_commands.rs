use bobbot_core::{BotService, MemoryTaskStore, StorageError, StorageResult, Task, TaskStore};
use std::cell::Cell;

fn bot_with(lines: &[&str]) -> BotService<MemoryTaskStore> {
    let mut bot = BotService::open(MemoryTaskStore::new());
    for line in lines {
        let reply = bot.handle(line);
        assert!(reply.ok, "setup command `{line}` failed: {}", reply.text);
    }
    bot
}

fn descriptions(bot: &BotService<impl TaskStore>) -> Vec<String> {
    bot.tasks()
        .iter()
        .map(|task| task.description.clone())
        .collect()
}

#[test]
fn add_commands_reply_with_render_and_count() {
    let mut bot = bot_with(&[]);
    let reply = bot.handle("deadline return book /by 2025-01-01");
    assert!(reply.ok);
    assert_eq!(
        reply.text,
        "Got it bobz. I've added this task:\n  [D][ ] return book (by: Jan 01 2025)\nNow you have 1 tasks in the list bobz."
    );
}

#[test]
fn loosely_written_dates_are_kept_as_typed() {
    let mut bot = bot_with(&[]);
    let reply = bot.handle("deadline pay rent /by 2025-1-1");
    assert!(reply.text.contains("[D][ ] pay rent (by: 2025-1-1)"));

    bot.handle("event trip /from jan 01 2025 0900 /to 2025-01-03 1800");
    assert_eq!(
        bot.tasks().get(1).unwrap().render(),
        "[E][ ] trip (from: jan 01 2025 0900 to: Jan 03 2025 1800)"
    );
}

#[test]
fn list_numbers_tasks_from_one() {
    let mut bot = bot_with(&[]);
    assert_eq!(bot.respond("list"), "No items in the list bobz.");

    bot.handle("todo read book");
    bot.handle("event meeting /from 2025-01-01 1400 /to 2025-01-01 1600");
    assert_eq!(
        bot.respond("list"),
        "Here are the items in your list bobz:\n\
         1. [T][ ] read book\n\
         2. [E][ ] meeting (from: Jan 01 2025 1400 to: Jan 01 2025 1600)"
    );
}

#[test]
fn malformed_deadline_and_event_report_format_errors() {
    let mut bot = bot_with(&[]);

    let deadline = bot.handle("deadline return book");
    assert!(!deadline.ok);
    assert!(deadline.text.contains("Invalid format for deadline"));

    let event = bot.handle("event meeting /from now");
    assert!(!event.ok);
    assert!(event.text.contains("Invalid format for event"));

    let mis_split = bot.handle("event go /to school /from mon /to tue");
    assert!(!mis_split.ok);
    assert!(bot.tasks().is_empty());
}

#[test]
fn out_of_range_and_non_numeric_indices_are_rejected() {
    let mut bot = bot_with(&["todo only"]);

    for line in ["mark 2", "unmark 0", "delete -1", "delete 5"] {
        let reply = bot.handle(line);
        assert!(!reply.ok, "{line} should fail");
        assert_eq!(reply.text, "BOBZ!!! That task number does not exist.");
    }

    let reply = bot.handle("mark one");
    assert!(!reply.ok);
    assert!(reply.text.contains("check your command format"));
    assert_eq!(bot.tasks().len(), 1);
    assert!(!bot.tasks().get(0).unwrap().done);
}

#[test]
fn invalid_command_keeps_session_open() {
    let mut bot = bot_with(&[]);
    let reply = bot.handle("dance");
    assert!(!reply.ok);
    assert!(!reply.exit);
    assert!(reply.text.starts_with("BOBZ!!! what are you saying"));

    let bye = bot.handle("  bye ");
    assert!(bye.exit);
    assert_eq!(bye.text, "Bye bobz. Hope to see you again soon bobz!");
}

#[test]
fn find_is_case_insensitive_over_descriptions() {
    let mut bot = bot_with(&["todo read book", "todo buy milk"]);

    for keyword in ["book", "BOOK", "bOoK"] {
        let reply = bot.handle(&format!("find {keyword}"));
        assert!(reply.ok);
        assert_eq!(
            reply.text,
            "Here are the matching tasks in your list bobz:\n1. [T][ ] read book"
        );
    }
    assert_eq!(bot.respond("find tea"), "No matching tasks found bobz.");
    assert_eq!(bot.tasks().len(), 2);
}

#[test]
fn delete_then_undo_restores_original_list() {
    let mut bot = bot_with(&["todo a", "todo b", "todo c"]);
    let before = bot.tasks().tasks().to_vec();

    let reply = bot.handle("delete 2");
    assert!(reply.text.contains("Now you have 2 tasks"));
    assert_eq!(descriptions(&bot), vec!["a", "c"]);

    let undo = bot.handle("undo");
    assert!(undo.ok);
    assert_eq!(bot.tasks().tasks(), before.as_slice());
    assert_eq!(bot.store().text(), "1. [T][ ] a\n2. [T][ ] b\n3. [T][ ] c\n");
}

#[test]
fn mark_then_undo_clears_only_that_task() {
    let mut bot = bot_with(&["todo a", "todo b", "mark 1"]);
    bot.handle("mark 2");

    bot.handle("undo");
    assert!(bot.tasks().get(0).unwrap().done);
    assert!(!bot.tasks().get(1).unwrap().done);
}

#[test]
fn unmark_then_undo_sets_done_again() {
    let mut bot = bot_with(&["todo a", "mark 1", "unmark 1"]);
    assert!(!bot.tasks().get(0).unwrap().done);

    bot.handle("undo");
    assert!(bot.tasks().get(0).unwrap().done);
}

#[test]
fn undo_add_removes_the_added_twin_not_its_copy() {
    let mut bot = bot_with(&["todo same", "todo other", "todo same"]);
    let first_id = bot.tasks().get(0).unwrap().id;

    bot.handle("undo");
    assert_eq!(descriptions(&bot), vec!["same", "other"]);
    assert_eq!(bot.tasks().get(0).unwrap().id, first_id);
}

#[test]
fn undo_twice_reports_nothing_the_second_time() {
    let mut bot = bot_with(&["todo a", "todo b"]);
    let first = bot.handle("undo");
    assert!(first.text.starts_with("Undone bobz!"));
    let snapshot = bot.tasks().tasks().to_vec();

    let second = bot.handle("undo");
    assert!(second.ok);
    assert_eq!(second.text, "Nothing to undo bobz.");
    assert_eq!(bot.tasks().tasks(), snapshot.as_slice());
}

#[test]
fn non_mutating_and_failed_commands_keep_pending_undo() {
    let mut bot = bot_with(&["todo a", "todo b"]);
    bot.handle("list");
    bot.handle("find a");
    bot.handle("delete 9");

    bot.handle("undo");
    assert_eq!(descriptions(&bot), vec!["a"]);
}

#[test]
fn undo_on_fresh_session_has_nothing_to_undo() {
    let store = MemoryTaskStore::with_text("1. [T][ ] loaded\n");
    let mut bot = BotService::open(store);
    assert_eq!(bot.respond("undo"), "Nothing to undo bobz.");
    assert_eq!(descriptions(&bot), vec!["loaded"]);
}

#[test]
fn reply_serializes_for_ui_callers() {
    let mut bot = bot_with(&[]);
    let json = serde_json::to_value(bot.handle("todo x")).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["exit"], false);

    let task = serde_json::to_value(Task::deadline("y", "2025-01-01")).unwrap();
    assert_eq!(task["kind"], "deadline");
    assert_eq!(task["due"]["form"], "date");
    assert_eq!(task["due"]["value"], "2025-01-01");
}

/// Store whose writes fail until `healthy` is set.
struct FlakyStore {
    healthy: Cell<bool>,
    saves: Cell<usize>,
}

impl TaskStore for FlakyStore {
    fn load(&self) -> Vec<Task> {
        Vec::new()
    }

    fn save(&self, _tasks: &[Task]) -> StorageResult<()> {
        if self.healthy.get() {
            self.saves.set(self.saves.get() + 1);
            Ok(())
        } else {
            Err(StorageError::Rejected("disk full".to_string()))
        }
    }
}

#[test]
fn failed_save_keeps_in_memory_change_and_reports_it() {
    let store = FlakyStore {
        healthy: Cell::new(false),
        saves: Cell::new(0),
    };
    let mut bot = BotService::open(store);

    let reply = bot.handle("todo survive");
    assert!(reply.ok);
    assert!(reply.text.ends_with("Something went wrong while saving: disk full"));
    assert_eq!(descriptions(&bot), vec!["survive"]);
    assert_eq!(bot.store().saves.get(), 0);

    bot.store().healthy.set(true);
    bot.handle("undo");
    assert!(bot.tasks().is_empty());
    assert_eq!(bot.store().saves.get(), 1);
}
