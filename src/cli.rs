//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Device`] - Exporting device, selecting the line grammar
//!
//! [`Args::to_config`] maps parsed arguments to an
//! [`AnalysisConfig`](crate::config::AnalysisConfig), so the binary and the
//! library run the same pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::core::filter::WHOLE_GROUP;
use crate::error::Result;
use crate::parser::DeviceFormat;

/// Analyze a WhatsApp chat export: message statistics, timelines,
/// activity heatmaps, word and emoji frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatwrap")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatwrap android chat.txt
    chatwrap ios chat.txt -o report.json --user Alice
    chatwrap aos chat.txt --stopwords stop_hinglish.txt --table table.csv
    chatwrap android chat.txt --after 2024-01-01 --before 2024-06-30
    chatwrap iphone chat.txt --list-senders")]
pub struct Args {
    /// Device the chat was exported from
    #[arg(value_enum)]
    pub device: Device,

    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Path to the JSON report
    #[arg(short, long, default_value = "chat_report.json")]
    pub output: PathBuf,

    /// Analyze a single sender instead of the whole group
    #[arg(short, long, value_name = "NAME", default_value = WHOLE_GROUP)]
    pub user: String,

    /// Stopword file, one word per line
    #[arg(short, long, value_name = "PATH")]
    pub stopwords: Option<PathBuf>,

    /// Also write the enriched message table as CSV
    #[arg(long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Print the selectable senders and exit
    #[arg(long)]
    pub list_senders: bool,
}

impl Args {
    /// Builds the library configuration from the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::InvalidDate`](crate::ChatwrapError::InvalidDate)
    /// for a malformed `--after` or `--before`.
    pub fn to_config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::new(self.device.into()).with_selection(&self.user);

        if let Some(path) = &self.stopwords {
            config = config.with_stopwords(path);
        }
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }

        Ok(config)
    }
}

/// Exporting device.
///
/// iPhone exports bracket the timestamp and include seconds; Android exports
/// separate the timestamp from the sender with ` - `.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    /// iPhone export: `[12/01/2023, 10:15:30 PM] Alice: Hello`
    #[value(alias = "iphone")]
    #[serde(alias = "iphone")]
    Ios,

    /// Android export: `12/1/23, 10:15 PM - Alice: Hello`
    #[default]
    #[value(alias = "aos")]
    #[serde(alias = "aos")]
    Android,
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(DeviceFormat::from(*self).name())
    }
}
