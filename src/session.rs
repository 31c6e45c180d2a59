//! An analysis session over one loaded export.
//!
//! The table and stopwords are loaded once; [`ChatSession::report`] can then
//! be called for any sender selection without re-reading input.
//!
//! # Example
//!
//! ```rust
//! use chatwrap::core::filter::SenderFilter;
//! use chatwrap::core::text::StopWords;
//! use chatwrap::parser::DeviceFormat;
//! use chatwrap::session::ChatSession;
//!
//! # fn main() -> chatwrap::Result<()> {
//! let session = ChatSession::from_export(
//!     "1/2/24, 8:00 AM - Alice: hi\n1/2/24, 8:01 AM - Bob: hey",
//!     DeviceFormat::Android,
//!     StopWords::empty(),
//! )?;
//!
//! assert_eq!(session.sender_options(), vec!["Whole Group", "Alice", "Bob"]);
//! let report = session.report(&SenderFilter::sender("Bob"));
//! assert_eq!(report.stats.total_messages, 1);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::core::filter::{DateRange, SenderFilter, WHOLE_GROUP};
use crate::core::report::AnalysisReport;
use crate::core::text::StopWords;
use crate::error::{ChatwrapError, Result};
use crate::parser::DeviceFormat;
use crate::table::ChatTable;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A chat table together with the stopwords used for word analysis.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    table: ChatTable,
    stopwords: StopWords,
}

impl ChatSession {
    pub fn new(table: ChatTable, stopwords: StopWords) -> Self {
        Self { table, stopwords }
    }

    /// Parses export text and builds the table.
    pub fn from_export(content: &str, format: DeviceFormat, stopwords: StopWords) -> Result<Self> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        let table = ChatTable::from_export(content, format)?;
        Ok(Self::new(table, stopwords))
    }

    /// Reads an export file and builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::Io`] if the file cannot be read and
    /// [`ChatwrapError::Utf8`] if it is not valid UTF-8.
    pub fn open(path: impl AsRef<Path>, format: DeviceFormat, stopwords: StopWords) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatwrapError::utf8(path.display().to_string(), e))?;
        Self::from_export(&content, format, stopwords)
    }

    /// Drops rows outside the date range.
    #[must_use]
    pub fn restrict(self, range: &DateRange) -> Self {
        if !range.is_active() {
            return self;
        }
        Self {
            table: self.table.restrict(range),
            stopwords: self.stopwords,
        }
    }

    pub fn table(&self) -> &ChatTable {
        &self.table
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Selection labels: `"Whole Group"` followed by every sender in order of
    /// first appearance.
    pub fn sender_options(&self) -> Vec<&str> {
        std::iter::once(WHOLE_GROUP)
            .chain(self.table.senders())
            .collect()
    }

    /// Runs every aggregation for the selection.
    pub fn report(&self, filter: &SenderFilter) -> AnalysisReport {
        AnalysisReport::build(&self.table, filter, &self.stopwords)
    }
}
