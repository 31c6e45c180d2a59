//! The enriched chat table.
//!
//! [`ChatTable::build`] keeps the dated lines from a parse, reads their
//! timestamps with the device grammar's exact format and derives the calendar
//! and clock columns. A timestamp that does not fit the format aborts the
//! build: it means the export came from the other device format.
//!
//! # Example
//!
//! ```rust
//! use chatwrap::ChatTable;
//! use chatwrap::core::filter::SenderFilter;
//! use chatwrap::parser::DeviceFormat;
//!
//! # fn main() -> chatwrap::Result<()> {
//! let table = ChatTable::from_export(
//!     "12/1/23, 10:15 PM - Alice: Hello there\n\
//!      12/1/23, 10:16 PM - Bob: Hi Alice",
//!     DeviceFormat::Android,
//! )?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.senders(), vec!["Alice", "Bob"]);
//! assert_eq!(table.select(&SenderFilter::sender("Bob")).len(), 1);
//! # Ok(())
//! # }
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::filter::{DateRange, SenderFilter};
use crate::error::{ChatwrapError, Result};
use crate::parser::{DeviceFormat, LineParser};
use crate::record::{ChatRecord, ParsedLine};

/// Ordered, immutable collection of dated chat records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTable {
    records: Vec<ChatRecord>,
}

impl ChatTable {
    /// Wraps already-enriched records.
    pub fn from_records(records: Vec<ChatRecord>) -> Self {
        Self { records }
    }

    /// Parses an export and builds the table in one step.
    pub fn from_export(content: &str, format: DeviceFormat) -> Result<Self> {
        let parser = LineParser::new(format)?;
        let outcome = parser.parse_str(content);
        Self::build(outcome.lines, format)
    }

    /// Builds a table from parsed lines.
    ///
    /// Lines without a date are discarded. Every remaining line must carry a
    /// date and time readable with `format`'s grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::InvalidTimestamp`] for the first dated line
    /// whose date or time does not parse.
    pub fn build(lines: Vec<ParsedLine>, format: DeviceFormat) -> Result<Self> {
        let time_format = format.time_format();
        let mut records = Vec::with_capacity(lines.len());

        for line in lines {
            let (Some(date_str), Some(time_str)) = (line.date, line.time) else {
                continue;
            };
            let row = records.len();

            let date_format = format.date_format(&date_str);
            let date = NaiveDate::parse_from_str(&date_str, date_format)
                .map_err(|_| ChatwrapError::invalid_timestamp(row, &date_str, date_format))?;
            let time = NaiveTime::parse_from_str(&time_str, time_format)
                .map_err(|_| ChatwrapError::invalid_timestamp(row, &time_str, time_format))?;

            records.push(ChatRecord::new(date, time, line.sender, line.message));
        }

        tracing::info!(format = %format, rows = records.len(), "built chat table");

        Ok(Self { records })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows in input order.
    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    /// Iterates over rows in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.records.iter()
    }

    /// Unique senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = Vec::new();
        for record in &self.records {
            if !senders.contains(&record.sender.as_str()) {
                senders.push(&record.sender);
            }
        }
        senders
    }

    /// Rows passing the sender filter, in input order.
    pub fn select(&self, filter: &SenderFilter) -> Vec<&ChatRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// New table holding only rows inside the date range.
    #[must_use]
    pub fn restrict(&self, range: &DateRange) -> ChatTable {
        if !range.is_active() {
            return self.clone();
        }
        ChatTable {
            records: self
                .records
                .iter()
                .filter(|r| range.contains(r.date))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
