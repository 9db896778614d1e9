//! Line-oriented text codec for task lists.
//!
//! # Responsibility
//! - Encode a task list as numbered render lines.
//! - Decode those lines back, dropping any line that does not parse.
//!
//! # Invariants
//! - Encoded output is one `"{n}. {render}\n"` line per task, nothing else.
//! - Decoding never fails as a whole; each bad line is skipped on its own.
//! - Descriptions or dates containing ` (by: `, ` (from: ` or ` to: ` do
//!   not survive a round trip; the format has no escaping.

use crate::model::task::{Task, TaskKind};
use log::{debug, warn};

const NUMBER_SEPARATOR: &str = ". ";
const DEADLINE_MARKER: &str = " (by: ";
const EVENT_MARKER: &str = " (from: ";
const EVENT_END_MARKER: &str = " to: ";

/// Encode/decode pair for whole task lists.
pub trait TaskCodec {
    fn encode(&self, tasks: &[Task]) -> String;
    fn decode(&self, text: &str) -> Vec<Task>;
}

/// The numbered render-line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec;

impl TaskCodec for LineCodec {
    fn encode(&self, tasks: &[Task]) -> String {
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| format!("{}{NUMBER_SEPARATOR}{}\n", index + 1, task.render()))
            .collect()
    }

    fn decode(&self, text: &str) -> Vec<Task> {
        let mut tasks = Vec::new();
        let mut skipped = 0_usize;

        for (line_index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            match decode_line(line) {
                Ok(task) => tasks.push(task),
                Err(reason) => {
                    skipped += 1;
                    warn!(
                        "event=task_decode module=storage status=skip line={} reason={}",
                        line_index + 1,
                        reason.code()
                    );
                }
            }
        }

        debug!(
            "event=task_decode module=storage status=ok loaded={} skipped={}",
            tasks.len(),
            skipped
        );
        tasks
    }
}

/// Why a stored line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingNumber,
    MissingBracket,
    TruncatedHeader,
    UnknownKind(char),
    MissingDeadlineMarker,
    MissingEventMarker,
    MalformedEventRange,
}

impl SkipReason {
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingNumber => "missing_number",
            Self::MissingBracket => "missing_bracket",
            Self::TruncatedHeader => "truncated_header",
            Self::UnknownKind(_) => "unknown_kind",
            Self::MissingDeadlineMarker => "missing_deadline_marker",
            Self::MissingEventMarker => "missing_event_marker",
            Self::MalformedEventRange => "malformed_event_range",
        }
    }
}

/// Decodes one trimmed, non-blank line.
///
/// Layout after the number: `[K][M] content`, where `K` is the kind letter
/// and `M` is `X` for done tasks.
pub fn decode_line(line: &str) -> Result<Task, SkipReason> {
    let (_, task_text) = line
        .split_once(NUMBER_SEPARATOR)
        .ok_or(SkipReason::MissingNumber)?;
    if !task_text.starts_with('[') {
        return Err(SkipReason::MissingBracket);
    }

    let mut header = task_text.chars();
    let kind_letter = header.nth(1).ok_or(SkipReason::TruncatedHeader)?;
    let done_marker = header.nth(2).ok_or(SkipReason::TruncatedHeader)?;
    header.next().ok_or(SkipReason::TruncatedHeader)?;
    let rest = header.as_str();
    let content = rest.strip_prefix(' ').unwrap_or(rest);

    let kind = TaskKind::from_letter(kind_letter).ok_or(SkipReason::UnknownKind(kind_letter))?;
    let mut task = match kind {
        TaskKind::Todo => Task::todo(content),
        TaskKind::Deadline => decode_deadline(content)?,
        TaskKind::Event => decode_event(content)?,
    };

    if done_marker == 'X' {
        task.mark_done();
    }
    Ok(task)
}

fn decode_deadline(content: &str) -> Result<Task, SkipReason> {
    let at = content
        .rfind(DEADLINE_MARKER)
        .ok_or(SkipReason::MissingDeadlineMarker)?;
    let description = &content[..at];
    let due = strip_closing_paren(&content[at + DEADLINE_MARKER.len()..]);
    Ok(Task::deadline(description, due))
}

fn decode_event(content: &str) -> Result<Task, SkipReason> {
    let at = content
        .rfind(EVENT_MARKER)
        .ok_or(SkipReason::MissingEventMarker)?;
    let description = &content[..at];
    let range = strip_closing_paren(&content[at + EVENT_MARKER.len()..]);

    let parts = range.split(EVENT_END_MARKER).collect::<Vec<_>>();
    match parts.as_slice() {
        [start, end] => Ok(Task::event(description, start, end)),
        _ => Err(SkipReason::MalformedEventRange),
    }
}

fn strip_closing_paren(text: &str) -> &str {
    text.strip_suffix(')').unwrap_or(text)
}
