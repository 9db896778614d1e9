//! Date values attached to deadlines and events.
//!
//! # Responsibility
//! - Accept user or stored text and keep either a parsed value or the raw text.
//! - Render parsed values in one fixed human format.
//!
//! # Invariants
//! - Construction never fails; unparsable text is retained verbatim.
//! - Each grammar is width-exact and case-sensitive: `2025-1-1` or
//!   `jan 01 2025` stay raw.
//! - The display form of a parsed value is accepted again on re-parse.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Input grammar for deadline dates, e.g. `2025-01-01`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Display grammar for deadline dates, e.g. `Jan 01 2025`.
pub const DATE_DISPLAY_FORMAT: &str = "%b %d %Y";
/// Input grammar for event date-times, e.g. `2025-01-01 1400`.
pub const DATE_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H%M";
/// Display grammar for event date-times, e.g. `Jan 01 2025 1400`.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%b %d %Y %H%M";

/// A date value that is either understood or kept as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "snake_case")]
pub enum When {
    /// Calendar date (deadlines).
    Date(NaiveDate),
    /// Calendar date with hour and minute (events).
    DateTime(NaiveDateTime),
    /// Free text such as `tomorrow` or `sunday 4pm`.
    Raw(String),
}

impl When {
    /// Parses deadline text: input grammar first, then display grammar.
    pub fn parse_date(text: &str) -> Self {
        exact_date(text, DATE_INPUT_FORMAT)
            .or_else(|| exact_date(text, DATE_DISPLAY_FORMAT))
            .map_or_else(|| Self::Raw(text.to_string()), Self::Date)
    }

    /// Parses event text: input grammar first, then display grammar.
    ///
    /// Blank text is kept raw without a parse attempt.
    pub fn parse_date_time(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Raw(text.to_string());
        }

        exact_date_time(text, DATE_TIME_INPUT_FORMAT)
            .or_else(|| exact_date_time(text, DATE_TIME_DISPLAY_FORMAT))
            .map_or_else(|| Self::Raw(text.to_string()), Self::DateTime)
    }

    /// Returns whether the text was understood as a date or date-time.
    pub fn is_parsed(&self) -> bool {
        !matches!(self, Self::Raw(_))
    }
}

// chrono accepts unpadded fields, signed years and any month-name case;
// a match only counts when formatting it back reproduces the input.
fn exact_date(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, format)
        .ok()
        .filter(|date| date.format(format).to_string() == text)
}

fn exact_date_time(text: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, format)
        .ok()
        .filter(|at| at.format(format).to_string() == text)
}

impl Display for When {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_DISPLAY_FORMAT)),
            Self::DateTime(at) => write!(f, "{}", at.format(DATE_TIME_DISPLAY_FORMAT)),
            Self::Raw(text) => f.write_str(text),
        }
    }
}
