//! Command dispatcher.
//!
//! # Responsibility
//! - Route parsed commands to the task list and undo log.
//! - Persist the full list after every successful mutation.
//! - Turn every outcome, including errors, into user-facing reply text.
//!
//! # Invariants
//! - No command error ends the session; only `Bye` sets `exit`.
//! - A failed save is reported but the in-memory change and its undo entry
//!   are kept, so memory and disk can diverge until the next good save.

use crate::model::task::{Task, TaskDetail, TaskValidationError};
use crate::parser::{parse, Command, CommandKind};
use crate::repo::task_list::{IndexError, TaskList};
use crate::service::messages;
use crate::storage::TaskStore;
use crate::undo::{UndoEntry, UndoLog, UndoOutcome};
use log::{error, info, log, warn, Level};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Argument shape problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    Deadline,
    Event,
    /// Task number text is not a decimal integer.
    TaskNumber(String),
}

/// Errors raised while executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Format(FormatError),
    Index(IndexError),
    EmptyDescription,
    EmptyKeyword,
    UnknownCommand,
}

impl CommandError {
    /// Stable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format(_) => "format",
            Self::Index(_) => "index",
            Self::EmptyDescription => "empty_description",
            Self::EmptyKeyword => "empty_keyword",
            Self::UnknownCommand => "unknown_command",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Format(FormatError::Deadline) => messages::DEADLINE_FORMAT,
            Self::Format(FormatError::Event) => messages::EVENT_FORMAT,
            Self::Format(FormatError::TaskNumber(_)) => messages::GENERIC_FORMAT,
            Self::Index(_) => messages::NO_SUCH_TASK,
            Self::EmptyDescription => messages::EMPTY_DESCRIPTION,
            Self::EmptyKeyword => messages::EMPTY_KEYWORD,
            Self::UnknownCommand => messages::UNKNOWN_COMMAND,
        };
        f.write_str(message)
    }
}

impl Error for CommandError {}

impl From<IndexError> for CommandError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

impl From<TaskValidationError> for CommandError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::EmptyDescription => Self::EmptyDescription,
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Response envelope for line and UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Whether the command succeeded.
    pub ok: bool,
    /// Whether the caller should stop reading commands.
    pub exit: bool,
    /// Human-readable response.
    pub text: String,
}

impl Reply {
    fn success(text: impl Into<String>) -> Self {
        Self {
            ok: true,
            exit: false,
            text: text.into(),
        }
    }

    fn failure(err: &CommandError) -> Self {
        Self {
            ok: false,
            exit: false,
            text: err.to_string(),
        }
    }

    fn farewell() -> Self {
        Self {
            ok: true,
            exit: true,
            text: messages::GOODBYE.to_string(),
        }
    }
}

/// Dispatcher owning the task list, the undo log and the store.
pub struct BotService<S: TaskStore> {
    tasks: TaskList,
    undo: UndoLog,
    store: S,
}

impl<S: TaskStore> BotService<S> {
    /// Loads the list from `store`.
    pub fn open(store: S) -> Self {
        let tasks = TaskList::from_tasks(store.load());
        info!(
            "event=service_open module=service status=ok count={}",
            tasks.len()
        );
        Self {
            tasks,
            undo: UndoLog::new(),
            store,
        }
    }

    pub fn welcome_message(&self) -> &'static str {
        messages::WELCOME
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn undo_log(&self) -> &UndoLog {
        &self.undo
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses and executes one input line.
    pub fn handle(&mut self, line: &str) -> Reply {
        self.execute(&parse(line))
    }

    /// Convenience for callers that only need the text.
    pub fn respond(&mut self, line: &str) -> String {
        self.handle(line).text
    }

    /// Executes one parsed command.
    pub fn execute(&mut self, command: &Command) -> Reply {
        let started_at = Instant::now();
        let result = match command.kind {
            CommandKind::Bye => {
                info!("event=command_exec module=service status=ok command=bye");
                return Reply::farewell();
            }
            CommandKind::List => Ok(self.list()),
            CommandKind::Mark => self.mark(command, true),
            CommandKind::Unmark => self.mark(command, false),
            CommandKind::Todo => self.add_todo(command),
            CommandKind::Deadline => self.add_deadline(command),
            CommandKind::Event => self.add_event(command),
            CommandKind::Delete => self.delete(command),
            CommandKind::Find => self.find(command),
            CommandKind::Undo => Ok(self.undo_last()),
            CommandKind::Invalid => Err(CommandError::UnknownCommand),
        };

        match result {
            Ok(text) => {
                let level = if command.kind.is_mutating() {
                    Level::Info
                } else {
                    Level::Debug
                };
                log!(
                    level,
                    "event=command_exec module=service status=ok command={} size={} duration_ms={}",
                    command.kind.label(),
                    self.tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Reply::success(text)
            }
            Err(err) => {
                warn!(
                    "event=command_exec module=service status=error command={} error_code={}",
                    command.kind.label(),
                    err.code()
                );
                Reply::failure(&err)
            }
        }
    }

    fn list(&self) -> String {
        if self.tasks.is_empty() {
            return messages::EMPTY_LIST.to_string();
        }
        numbered(messages::LIST_HEADER, self.tasks.iter())
    }

    fn mark(&mut self, command: &Command, done: bool) -> CommandResult<String> {
        let index = self.resolve_index(command)?;
        let task = self.tasks.get_mut(index)?;
        if done {
            task.mark_done();
        } else {
            task.mark_not_done();
        }
        let rendered = task.render();
        let id = task.id;

        self.undo.record(if done {
            UndoEntry::Mark(id)
        } else {
            UndoEntry::Unmark(id)
        });

        let header = if done {
            messages::MARKED
        } else {
            messages::UNMARKED
        };
        Ok(self.persist(format!("{header}\n  {rendered}")))
    }

    fn add_todo(&mut self, command: &Command) -> CommandResult<String> {
        let description = command.arg(0).unwrap_or_default();
        let task = Task::todo(description);
        task.validate()?;
        Ok(self.add(task))
    }

    fn add_deadline(&mut self, command: &Command) -> CommandResult<String> {
        match command.args.as_slice() {
            [description, due] => Ok(self.add(Task::deadline(description.trim(), due.trim()))),
            _ => Err(CommandError::Format(FormatError::Deadline)),
        }
    }

    fn add_event(&mut self, command: &Command) -> CommandResult<String> {
        match command.args.as_slice() {
            [description, start, end] => Ok(self.add(Task::event(
                description.trim(),
                start.trim(),
                end.trim(),
            ))),
            _ => Err(CommandError::Format(FormatError::Event)),
        }
    }

    fn add(&mut self, task: Task) -> String {
        let rendered = task.render();
        info!(
            "event=task_add module=service status=ok kind={} raw_dates={}",
            task.kind().label(),
            raw_dates(&task)
        );
        self.undo.record(UndoEntry::Add(task.id));
        self.tasks.add(task);
        let text = format!(
            "{}\n  {rendered}\n{}",
            messages::ADDED,
            messages::task_count(self.tasks.len())
        );
        self.persist(text)
    }

    fn delete(&mut self, command: &Command) -> CommandResult<String> {
        let index = self.resolve_index(command)?;
        let removed = self.tasks.delete(index)?;
        let text = format!(
            "{}\n  {removed}\n{}",
            messages::REMOVED,
            messages::task_count(self.tasks.len())
        );
        self.undo.record(UndoEntry::Delete {
            task: removed,
            index,
        });
        Ok(self.persist(text))
    }

    fn find(&self, command: &Command) -> CommandResult<String> {
        let keyword = command.arg(0).unwrap_or_default();
        if keyword.is_empty() {
            return Err(CommandError::EmptyKeyword);
        }

        let matches = self.tasks.find_by_keyword(keyword);
        if matches.is_empty() {
            return Ok(messages::NO_MATCHES.to_string());
        }
        Ok(numbered(messages::MATCH_HEADER, matches.into_iter()))
    }

    fn undo_last(&mut self) -> String {
        match self.undo.undo(&mut self.tasks) {
            UndoOutcome::NothingToUndo => messages::NOTHING_TO_UNDO.to_string(),
            UndoOutcome::TargetMissing(_) => messages::UNDO_TARGET_MISSING.to_string(),
            UndoOutcome::Reverted { action, task } => {
                let text = format!(
                    "{}\n  {task}\n{}",
                    messages::undone(action),
                    messages::task_count(self.tasks.len())
                );
                self.persist(text)
            }
        }
    }

    /// Converts the 1-based task number argument into a list position.
    fn resolve_index(&self, command: &Command) -> CommandResult<usize> {
        let raw = command.arg(0).unwrap_or_default();
        let number = raw
            .parse::<i64>()
            .map_err(|_| CommandError::Format(FormatError::TaskNumber(raw.to_string())))?;
        let index = number.saturating_sub(1);
        usize::try_from(index).map_err(|_| {
            CommandError::Index(IndexError {
                index,
                len: self.tasks.len(),
            })
        })
    }

    /// Saves the list; appends a warning line to `text` on failure.
    fn persist(&self, text: String) -> String {
        match self.store.save(self.tasks.tasks()) {
            Ok(()) => text,
            Err(err) => {
                error!(
                    "event=task_persist module=service status=error size={} error={}",
                    self.tasks.len(),
                    err
                );
                format!("{text}\n{}", messages::save_failed(&err))
            }
        }
    }
}

/// Counts date fields kept as free text.
fn raw_dates(task: &Task) -> usize {
    match &task.detail {
        TaskDetail::Todo => 0,
        TaskDetail::Deadline { due } => usize::from(!due.is_parsed()),
        TaskDetail::Event { start, end } => [start, end]
            .into_iter()
            .filter(|when| !when.is_parsed())
            .count(),
    }
}

fn numbered<'a>(header: &str, tasks: impl Iterator<Item = &'a Task>) -> String {
    let mut text = header.to_string();
    for (position, task) in tasks.enumerate() {
        text.push_str(&format!("\n{}. {task}", position + 1));
    }
    text
}
