//! Report and table writers.
//!
//! - [`write_report_json`] / [`to_report_json`] - pretty-printed
//!   [`AnalysisReport`](crate::core::report::AnalysisReport), requires `json-output` feature
//! - [`write_table_csv`] / [`to_table_csv`] - the enriched table with semicolon
//!   delimiter, requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatwrap::Result<()> {
//! use chatwrap::core::output::{write_report_json, write_table_csv};
//! use chatwrap::core::filter::SenderFilter;
//! use chatwrap::core::text::StopWords;
//! use chatwrap::parser::DeviceFormat;
//! use chatwrap::session::ChatSession;
//!
//! let session = ChatSession::open("chat.txt", DeviceFormat::Android, StopWords::empty())?;
//!
//! write_report_json(&session.report(&SenderFilter::WholeGroup), "report.json")?;
//! write_table_csv(session.table(), "table.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{TABLE_COLUMNS, to_table_csv, write_table_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_report_json, write_report_json};
