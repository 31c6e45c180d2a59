//! Analysis over a built [`ChatTable`](crate::ChatTable).
//!
//! This module contains:
//! - [`filter`] - Sender selection and date ranges
//! - [`stats`] - Counts, timelines and activity maps
//! - [`text`] - Stopwords, word frequencies and word-cloud data
//! - [`emoji`] - Emoji frequencies
//! - [`report`] - All of the above bundled for one selection
//! - [`output`] - JSON report and CSV table writers
//!
//! # Quick Start
//!
//! ```rust
//! use chatwrap::core::{SenderFilter, StopWords, fetch_stats, generate_wc};
//! use chatwrap::ChatTable;
//! use chatwrap::parser::DeviceFormat;
//!
//! # fn main() -> chatwrap::Result<()> {
//! let table = ChatTable::from_export("1/2/24, 8:00 AM - Alice: hi all", DeviceFormat::Android)?;
//! let filter = SenderFilter::WholeGroup;
//!
//! assert_eq!(fetch_stats(&table, &filter).total_words, 2);
//! assert_eq!(generate_wc(&table, &filter, &StopWords::empty()).top_words.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod emoji;
pub mod filter;
pub mod output;
pub mod report;
pub mod stats;
pub mod text;

pub use emoji::{EmojiCount, emoji_analysis};
pub use filter::{DateRange, SenderFilter, WHOLE_GROUP};
pub use report::AnalysisReport;
pub use stats::{
    ActiveUsers, ActivityCount, ChatStats, DailyCount, Heatmap, MonthlyCount, activity_heatmap,
    daily_timeline, fetch_stats, month_activity_map, monthly_timeline, most_active_user,
    week_activity_map,
};
pub use text::{StopWords, WordCloud, WordCloudData, generate_wc};

#[cfg(feature = "csv-output")]
pub use output::{to_table_csv, write_table_csv};
#[cfg(feature = "json-output")]
pub use output::{to_report_json, write_report_json};
