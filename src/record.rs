//! Row types for parsed chat exports.
//!
//! Two shapes exist:
//!
//! - [`ParsedLine`] is what the line parser emits for every non-empty line.
//!   Lines that did not match the device grammar carry no date or time and the
//!   `"Unknown"` sender sentinel.
//! - [`ChatRecord`] is a row of a built [`ChatTable`](crate::ChatTable): a
//!   dated message with every derived time field filled in.
//!
//! # Example
//!
//! ```
//! use chatwrap::record::{ParsedLine, UNKNOWN_SENDER};
//!
//! let orphan = ParsedLine::unknown("Messages and calls are end-to-end encrypted.");
//! assert_eq!(orphan.sender, UNKNOWN_SENDER);
//! assert!(!orphan.is_dated());
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::parsing::ParsedFields;

/// Sender assigned to lines the device grammar could not read.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// A single line of an export after grammar matching.
///
/// `time` holds the clock text and meridiem joined by one space
/// (`"10:15 PM"`), which is the form the table builder parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Raw date text, `None` for unmatched lines.
    pub date: Option<String>,

    /// Raw time text with meridiem, `None` for unmatched lines.
    pub time: Option<String>,

    /// Trimmed sender name, or [`UNKNOWN_SENDER`].
    pub sender: String,

    /// Message text. For unmatched lines, the whole trimmed line.
    pub message: String,
}

impl ParsedLine {
    /// Builds a line from grammar captures.
    pub fn matched(fields: &ParsedFields<'_>) -> Self {
        Self {
            date: Some(fields.date.to_string()),
            time: Some(format!(
                "{} {}",
                fields.time,
                fields.meridiem.to_ascii_uppercase()
            )),
            sender: fields.sender.trim().to_string(),
            message: fields.message.to_string(),
        }
    }

    /// Builds the sentinel row for a line the grammar rejected.
    pub fn unknown(line: &str) -> Self {
        Self {
            date: None,
            time: None,
            sender: UNKNOWN_SENDER.to_string(),
            message: line.trim().to_string(),
        }
    }

    /// Returns `true` if the grammar produced a date for this line.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}

/// One message in a [`ChatTable`](crate::ChatTable).
///
/// Derived fields mirror the columns a dashboard groups by:
///
/// | Field | Example |
/// |-------|---------|
/// | `month` | `"January"` |
/// | `day` | `12` |
/// | `day_name` | `"Thursday"` |
/// | `year` | `2023` |
/// | `hour_with_ampm` | `"10 PM"` |
/// | `minute` | `15` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub sender: String,
    pub message: String,
    pub month: String,
    pub day: u32,
    pub day_name: String,
    pub year: i32,
    pub hour_with_ampm: String,
    pub minute: u32,
}

impl ChatRecord {
    /// Creates a record and derives its calendar and clock fields.
    ///
    /// # Example
    ///
    /// ```
    /// use chatwrap::ChatRecord;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = ChatRecord::new(
    ///     NaiveDate::from_ymd_opt(2023, 1, 12).unwrap(),
    ///     NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
    ///     "Alice",
    ///     "Morning!",
    /// );
    /// assert_eq!(record.month, "January");
    /// assert_eq!(record.day_name, "Thursday");
    /// assert_eq!(record.hour_with_ampm, "09 AM");
    /// assert_eq!(record.minute, 5);
    /// ```
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        sender: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time,
            sender: sender.into(),
            message: message.into(),
            month: date.format("%B").to_string(),
            day: date.day(),
            day_name: date.format("%A").to_string(),
            year: date.year(),
            hour_with_ampm: time.format("%I %p").to_string(),
            minute: time.minute(),
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of whitespace-separated tokens in the message.
    pub fn word_count(&self) -> usize {
        self.message.split_whitespace().count()
    }
}
