//! Command grammar and parser.
//!
//! Event arguments are split on either `" /from "` or `" /to "` wherever they
//! occur, so a description that itself contains one of those literals splits
//! into extra parts and is rejected downstream as malformed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

const MARK_PREFIX: &str = "mark ";
const UNMARK_PREFIX: &str = "unmark ";
const DELETE_PREFIX: &str = "delete ";
const TODO_PREFIX: &str = "todo ";
const DEADLINE_PREFIX: &str = "deadline ";
const EVENT_PREFIX: &str = "event ";
const FIND_PREFIX: &str = "find ";

const DEADLINE_DELIMITER: &str = " /by ";

static EVENT_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" /from | /to ").expect("valid event delimiter regex"));

/// Fixed set of recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Bye,
    List,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    Delete,
    Find,
    Undo,
    Invalid,
}

impl CommandKind {
    /// Returns whether a successful run of this command changes the list.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::Mark
                | Self::Unmark
                | Self::Todo
                | Self::Deadline
                | Self::Event
                | Self::Delete
                | Self::Undo
        )
    }

    /// Lowercase label used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bye => "bye",
            Self::List => "list",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Todo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::Undo => "undo",
            Self::Invalid => "invalid",
        }
    }
}

/// One parsed input line.
///
/// `args` count and meaning depend on `kind`:
/// - `Mark`/`Unmark`/`Delete`: `[task_number]` (1-based text)
/// - `Todo`: `[description]`
/// - `Deadline`: `[description, due]` when well-formed
/// - `Event`: `[description, start, end]` when well-formed
/// - `Find`: `[keyword]`
/// - everything else: `[]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub kind: CommandKind,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(kind: CommandKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    fn bare(kind: CommandKind) -> Self {
        Self::new(kind, Vec::new())
    }

    fn single(kind: CommandKind, rest: &str) -> Self {
        Self::new(kind, vec![rest.trim().to_string()])
    }

    /// Returns the argument at `position`, if present.
    pub fn arg(&self, position: usize) -> Option<&str> {
        self.args.get(position).map(String::as_str)
    }
}

/// Parses one input line.
pub fn parse(line: &str) -> Command {
    let input = line.trim();

    match input {
        "bye" => return Command::bare(CommandKind::Bye),
        "list" => return Command::bare(CommandKind::List),
        "undo" => return Command::bare(CommandKind::Undo),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix(MARK_PREFIX) {
        Command::single(CommandKind::Mark, rest)
    } else if let Some(rest) = input.strip_prefix(UNMARK_PREFIX) {
        Command::single(CommandKind::Unmark, rest)
    } else if let Some(rest) = input.strip_prefix(TODO_PREFIX) {
        Command::single(CommandKind::Todo, rest)
    } else if let Some(rest) = input.strip_prefix(DEADLINE_PREFIX) {
        Command::new(CommandKind::Deadline, split_deadline(rest))
    } else if let Some(rest) = input.strip_prefix(EVENT_PREFIX) {
        Command::new(CommandKind::Event, split_event(rest))
    } else if let Some(rest) = input.strip_prefix(DELETE_PREFIX) {
        Command::single(CommandKind::Delete, rest)
    } else if let Some(rest) = input.strip_prefix(FIND_PREFIX) {
        Command::single(CommandKind::Find, rest)
    } else {
        Command::bare(CommandKind::Invalid)
    }
}

fn split_deadline(rest: &str) -> Vec<String> {
    rest.splitn(2, DEADLINE_DELIMITER)
        .map(str::to_string)
        .collect()
}

fn split_event(rest: &str) -> Vec<String> {
    let mut parts = EVENT_DELIMITER_RE
        .split(rest)
        .map(str::to_string)
        .collect::<Vec<_>>();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
