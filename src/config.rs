//! Configuration for a full analysis run.
//!
//! [`AnalysisConfig`] describes one run of the pipeline without tying the
//! library to a CLI framework. The binary maps its arguments into it.
//!
//! # Example
//!
//! ```rust
//! use chatwrap::config::{AnalysisConfig, analyze};
//! use chatwrap::parser::DeviceFormat;
//!
//! # fn main() -> chatwrap::Result<()> {
//! let config = AnalysisConfig::new(DeviceFormat::Android)
//!     .with_selection("Alice")
//!     .with_date_from("2024-02-01")?;
//!
//! let report = analyze(
//!     "31/1/24, 8:00 AM - Alice: january\n\
//!      1/2/24, 8:00 AM - Alice: february\n\
//!      1/2/24, 8:01 AM - Bob: hi",
//!     &config,
//! )?;
//! assert_eq!(report.selection, "Alice");
//! assert_eq!(report.stats.total_messages, 1);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::filter::{DateRange, SenderFilter, WHOLE_GROUP};
use crate::core::report::AnalysisReport;
use crate::core::text::StopWords;
use crate::error::Result;
use crate::parser::DeviceFormat;
use crate::session::ChatSession;

/// Settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Grammar of the export.
    pub device_format: DeviceFormat,

    /// Stopword file; `None` disables stopword filtering.
    pub stopwords: Option<PathBuf>,

    /// Sender name or `"Whole Group"` (default).
    pub selection: String,

    /// Rows outside this range are dropped before aggregation.
    #[serde(default)]
    pub date_range: DateRange,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            device_format: DeviceFormat::default(),
            stopwords: None,
            selection: WHOLE_GROUP.to_string(),
            date_range: DateRange::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a whole-group configuration for the device format.
    pub fn new(device_format: DeviceFormat) -> Self {
        Self {
            device_format,
            ..Self::default()
        }
    }

    /// Sets the device format.
    #[must_use]
    pub fn with_device_format(mut self, format: DeviceFormat) -> Self {
        self.device_format = format;
        self
    }

    /// Sets the stopword file.
    #[must_use]
    pub fn with_stopwords(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = Some(path.into());
        self
    }

    /// Sets the sender selection.
    #[must_use]
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Sets the whole date range.
    #[must_use]
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Sets the start date (inclusive, `YYYY-MM-DD`).
    pub fn with_date_from(mut self, date: &str) -> Result<Self> {
        self.date_range = self.date_range.with_date_from(date)?;
        Ok(self)
    }

    /// Sets the end date (inclusive, `YYYY-MM-DD`).
    pub fn with_date_to(mut self, date: &str) -> Result<Self> {
        self.date_range = self.date_range.with_date_to(date)?;
        Ok(self)
    }

    /// Filter for the configured selection.
    pub fn filter(&self) -> SenderFilter {
        SenderFilter::from_selection(&self.selection)
    }

    /// Loads the configured stopwords, or an empty set if none is configured.
    pub fn load_stopwords(&self) -> Result<StopWords> {
        match &self.stopwords {
            Some(path) => StopWords::load(path),
            None => Ok(StopWords::empty()),
        }
    }

    /// Builds a session from export text: parse, build, restrict to the date
    /// range and load stopwords.
    pub fn session(&self, content: &str) -> Result<ChatSession> {
        let session = ChatSession::from_export(content, self.device_format, self.load_stopwords()?)?;
        Ok(session.restrict(&self.date_range))
    }
}

/// Runs the whole pipeline on export text.
///
/// # Errors
///
/// Propagates table-building errors and stopword read failures.
pub fn analyze(content: &str, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let session = config.session(content)?;
    Ok(session.report(&config.filter()))
}
