//! Per-sender and per-time-bucket aggregations.
//!
//! Every function takes the table and a [`SenderFilter`], applies the filter
//! first and then aggregates. A filter that selects nothing produces zeros and
//! empty collections rather than an error.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`fetch_stats`] | message, word and media counts |
//! | [`most_active_user`] | top senders and share of messages |
//! | [`monthly_timeline`] | messages per (year, month) |
//! | [`daily_timeline`] | messages per calendar date |
//! | [`week_activity_map`] | messages per weekday name |
//! | [`month_activity_map`] | messages per month name |
//! | [`activity_heatmap`] | weekday × hour bucket matrix |

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::filter::SenderFilter;
use crate::table::ChatTable;

/// Placeholder text WhatsApp writes in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Number of senders reported in [`ActiveUsers::top`].
pub const TOP_SENDERS: usize = 5;

/// Headline counts for a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub total_media: usize,
}

/// Messages sent by one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    pub sender: String,
    pub count: usize,
}

/// Messages sent by one sender and their share of the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub sender: String,
    pub count: usize,
    /// Percentage of all selected messages, rounded to 2 decimals.
    pub percentage: f64,
}

/// Result of [`most_active_user`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActiveUsers {
    /// The [`TOP_SENDERS`] busiest senders.
    pub top: Vec<SenderCount>,
    /// Every sender with count and percentage.
    pub table: Vec<SenderShare>,
}

/// One point of the monthly timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: String,
    pub count: usize,
    /// `"Month-Year"`, e.g. `"January-2023"`.
    pub label: String,
}

/// One point of the daily timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Count for one label of a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub label: String,
    pub count: usize,
}

/// Weekday × hour-bucket message counts.
///
/// Rows are the weekdays present in the selection, Monday first. Columns are
/// the hour buckets present, from `"12 AM"` to `"11 PM"`. Combinations with no
/// messages hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub hours: Vec<String>,
    /// `counts[row][column]`, aligned with `days` and `hours`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns `true` if the selection had no rows.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Count for a (weekday name, hour bucket) cell.
    ///
    /// Returns `None` when either label is not part of the matrix.
    pub fn get(&self, day: &str, hour: &str) -> Option<usize> {
        let row = self.days.iter().position(|d| d == day)?;
        let column = self.hours.iter().position(|h| h == hour)?;
        Some(self.counts[row][column])
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Message, word and media counts.
///
/// Words are whitespace-separated tokens. Media messages are those whose text
/// contains [`MEDIA_OMITTED`].
///
/// # Example
///
/// ```
/// use chatwrap::ChatTable;
/// use chatwrap::core::filter::SenderFilter;
/// use chatwrap::core::stats::fetch_stats;
/// use chatwrap::parser::DeviceFormat;
///
/// # fn main() -> chatwrap::Result<()> {
/// let table = ChatTable::from_export(
///     "1/2/24, 8:00 AM - Alice: good morning all\n\
///      1/2/24, 8:01 AM - Bob: <Media omitted>",
///     DeviceFormat::Android,
/// )?;
///
/// let stats = fetch_stats(&table, &SenderFilter::WholeGroup);
/// assert_eq!(stats.total_messages, 2);
/// assert_eq!(stats.total_words, 5);
/// assert_eq!(stats.total_media, 1);
/// # Ok(())
/// # }
/// ```
pub fn fetch_stats(table: &ChatTable, filter: &SenderFilter) -> ChatStats {
    let rows = table.select(filter);
    ChatStats {
        total_messages: rows.len(),
        total_words: rows.iter().map(|r| r.word_count()).sum(),
        total_media: rows
            .iter()
            .filter(|r| r.message.contains(MEDIA_OMITTED))
            .count(),
    }
}

/// Busiest senders and every sender's share of messages.
///
/// Intended for the whole group; with a sender filter the only entry is that
/// sender at 100%.
pub fn most_active_user(table: &ChatTable, filter: &SenderFilter) -> ActiveUsers {
    let rows = table.select(filter);
    let counts = value_counts(rows.iter().map(|r| r.sender.as_str()));
    let total = rows.len();

    let top = counts
        .iter()
        .take(TOP_SENDERS)
        .map(|c| SenderCount {
            sender: c.label.clone(),
            count: c.count,
        })
        .collect();

    let table = counts
        .into_iter()
        .map(|c| SenderShare {
            percentage: round2(c.count as f64 / total as f64 * 100.0),
            sender: c.label,
            count: c.count,
        })
        .collect();

    ActiveUsers { top, table }
}

/// Messages per (year, month), oldest first.
pub fn monthly_timeline(table: &ChatTable, filter: &SenderFilter) -> Vec<MonthlyCount> {
    let mut groups: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();

    for record in table.select(filter) {
        groups
            .entry((record.year, record.date.month()))
            .or_insert_with(|| (record.month.clone(), 0))
            .1 += 1;
    }

    groups
        .into_iter()
        .map(|((year, _), (month, count))| MonthlyCount {
            label: format!("{month}-{year}"),
            year,
            month,
            count,
        })
        .collect()
}

/// Messages per calendar date, oldest first.
pub fn daily_timeline(table: &ChatTable, filter: &SenderFilter) -> Vec<DailyCount> {
    let mut groups: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for record in table.select(filter) {
        *groups.entry(record.date).or_default() += 1;
    }

    groups
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Messages per weekday name, busiest first.
pub fn week_activity_map(table: &ChatTable, filter: &SenderFilter) -> Vec<ActivityCount> {
    value_counts(table.select(filter).into_iter().map(|r| r.day_name.as_str()))
}

/// Messages per month name, busiest first.
pub fn month_activity_map(table: &ChatTable, filter: &SenderFilter) -> Vec<ActivityCount> {
    value_counts(table.select(filter).into_iter().map(|r| r.month.as_str()))
}

/// Weekday × hour-bucket matrix of message counts.
///
/// # Example
///
/// ```
/// use chatwrap::ChatTable;
/// use chatwrap::core::filter::SenderFilter;
/// use chatwrap::core::stats::activity_heatmap;
/// use chatwrap::parser::DeviceFormat;
///
/// # fn main() -> chatwrap::Result<()> {
/// // 1 Jan 2024 is a Monday, 2 Jan a Tuesday
/// let table = ChatTable::from_export(
///     "1/1/24, 9:00 AM - Alice: a\n\
///      1/1/24, 9:30 AM - Bob: b\n\
///      2/1/24, 8:15 PM - Alice: c",
///     DeviceFormat::Android,
/// )?;
///
/// let heatmap = activity_heatmap(&table, &SenderFilter::WholeGroup);
/// assert_eq!(heatmap.days, vec!["Monday", "Tuesday"]);
/// assert_eq!(heatmap.hours, vec!["09 AM", "08 PM"]);
/// assert_eq!(heatmap.get("Monday", "09 AM"), Some(2));
/// assert_eq!(heatmap.get("Monday", "08 PM"), Some(0));
/// # Ok(())
/// # }
/// ```
pub fn activity_heatmap(table: &ChatTable, filter: &SenderFilter) -> Heatmap {
    let rows = table.select(filter);

    let mut days: Vec<(Weekday, &str)> = Vec::new();
    let mut hours: Vec<(u32, &str)> = Vec::new();
    for record in &rows {
        let weekday = record.date.weekday();
        if !days.iter().any(|(d, _)| *d == weekday) {
            days.push((weekday, &record.day_name));
        }
        let hour = record.time.hour();
        if !hours.iter().any(|(h, _)| *h == hour) {
            hours.push((hour, &record.hour_with_ampm));
        }
    }
    days.sort_by_key(|(d, _)| d.num_days_from_monday());
    hours.sort_by_key(|(h, _)| *h);

    let mut counts = vec![vec![0usize; hours.len()]; days.len()];
    for record in &rows {
        let weekday = record.date.weekday();
        let hour = record.time.hour();
        if let (Some(row), Some(column)) = (
            days.iter().position(|(d, _)| *d == weekday),
            hours.iter().position(|(h, _)| *h == hour),
        ) {
            counts[row][column] += 1;
        }
    }

    Heatmap {
        days: days.into_iter().map(|(_, name)| name.to_string()).collect(),
        hours: hours.into_iter().map(|(_, name)| name.to_string()).collect(),
        counts,
    }
}

/// Counts labels, busiest first; ties keep first-seen order.
fn value_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ActivityCount> {
    let mut counts: Vec<ActivityCount> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(ActivityCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
