//! # Chatwrap
//!
//! A Rust library for analyzing WhatsApp chat exports: message statistics,
//! activity timelines and heatmaps, word and emoji frequencies.
//!
//! ## Overview
//!
//! Chatwrap reads the plain-text export produced by WhatsApp's "Export chat"
//! on either device:
//! - **iOS**: `[12/01/2023, 10:15:30 PM] Alice: Hello`
//! - **Android**: `12/1/23, 10:15 PM - Alice: Hello`
//!
//! The device is always given by the caller; the two grammars are not guessed.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatwrap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "12/1/23, 10:15 PM - Alice: Hello there 👋\n\
//!                   12/1/23, 10:16 PM - Bob: <Media omitted>\n\
//!                   13/1/23, 8:02 AM - Alice: Morning";
//!
//!     let session = ChatSession::from_export(export, DeviceFormat::Android, StopWords::empty())?;
//!     let report = session.report(&SenderFilter::WholeGroup);
//!
//!     assert_eq!(report.stats.total_messages, 3);
//!     assert_eq!(report.stats.total_media, 1);
//!     assert_eq!(report.emojis[0].emoji, "👋");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser::LineParser`] turns each line into a [`record::ParsedLine`];
//!    lines the grammar rejects become `"Unknown"` rows.
//! 2. [`ChatTable::build`] drops those rows, reads timestamps and derives the
//!    calendar columns of each [`ChatRecord`].
//! 3. The [`core`] aggregations take the table and a
//!    [`SenderFilter`](core::filter::SenderFilter).
//!
//! [`config::analyze`] runs all three steps from an
//! [`AnalysisConfig`](config::AnalysisConfig).
//!
//! ## Module Structure
//!
//! - [`parser`]: [`DeviceFormat`](parser::DeviceFormat), [`LineParser`](parser::LineParser)
//! - [`parsing`]: the per-device regex grammars
//! - [`record`]: parsed lines and enriched records
//! - [`table`]: [`ChatTable`]
//! - [`core`]: filters, statistics, text and emoji analysis, reports, writers
//! - [`session`]: [`ChatSession`](session::ChatSession)
//! - [`config`]: [`AnalysisConfig`](config::AnalysisConfig), [`analyze`](config::analyze)
//! - [`error`]: [`ChatwrapError`], [`Result`]
//! - [`prelude`]: convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod session;
pub mod table;

pub use error::{ChatwrapError, Result};
pub use record::ChatRecord;
pub use table::ChatTable;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatwrap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatwrapError, Result};

    pub use crate::config::{AnalysisConfig, analyze};
    pub use crate::parser::{DeviceFormat, LineParser, ParseOutcome};
    pub use crate::record::{ChatRecord, ParsedLine};
    pub use crate::session::ChatSession;
    pub use crate::table::ChatTable;

    pub use crate::core::emoji::{EmojiCount, emoji_analysis};
    pub use crate::core::filter::{DateRange, SenderFilter, WHOLE_GROUP};
    pub use crate::core::report::AnalysisReport;
    pub use crate::core::stats::{
        ActiveUsers, ChatStats, Heatmap, activity_heatmap, daily_timeline, fetch_stats,
        month_activity_map, monthly_timeline, most_active_user, week_activity_map,
    };
    pub use crate::core::text::{StopWords, WordCloud, generate_wc};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_table_csv, write_table_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_report_json, write_report_json};
}
