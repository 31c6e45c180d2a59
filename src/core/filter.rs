//! Row selection by sender and date range.
//!
//! This module provides [`SenderFilter`], the selection every aggregation
//! applies first, and [`DateRange`] for narrowing a table to a period.
//!
//! # Filter Types
//!
//! | Filter | Applied by | Description |
//! |--------|------------|-------------|
//! | Sender | [`ChatTable::select`](crate::ChatTable::select) | One sender or the whole group |
//! | Date from | [`with_date_from`](DateRange::with_date_from) | Rows on or after date |
//! | Date to | [`with_date_to`](DateRange::with_date_to) | Rows on or before date |
//!
//! # Examples
//!
//! ```
//! use chatwrap::core::filter::{SenderFilter, WHOLE_GROUP};
//!
//! assert_eq!(SenderFilter::from_selection(WHOLE_GROUP), SenderFilter::WholeGroup);
//! assert_eq!(
//!     SenderFilter::from_selection("Alice"),
//!     SenderFilter::Sender("Alice".into())
//! );
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact and case-sensitive, since export display names
//!   are the identity
//! - Date bounds are inclusive

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatwrapError;
use crate::record::ChatRecord;

/// Selection label that means "no sender restriction".
pub const WHOLE_GROUP: &str = "Whole Group";

/// Sender restriction applied before every aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderFilter {
    /// Aggregate over all rows.
    #[default]
    WholeGroup,

    /// Aggregate over rows from this sender only.
    Sender(String),
}

impl SenderFilter {
    /// Restricts to one sender.
    pub fn sender(name: impl Into<String>) -> Self {
        SenderFilter::Sender(name.into())
    }

    /// Maps a dashboard selection label to a filter.
    ///
    /// [`WHOLE_GROUP`] selects every row; any other label is a sender name.
    pub fn from_selection(selection: &str) -> Self {
        if selection == WHOLE_GROUP {
            SenderFilter::WholeGroup
        } else {
            SenderFilter::Sender(selection.to_string())
        }
    }

    /// Returns `true` for the whole-group sentinel.
    pub fn is_whole_group(&self) -> bool {
        matches!(self, SenderFilter::WholeGroup)
    }

    /// Label suitable for headings: the sender name or [`WHOLE_GROUP`].
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::WholeGroup => WHOLE_GROUP,
            SenderFilter::Sender(name) => name,
        }
    }

    /// Returns `true` if the record passes this filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        match self {
            SenderFilter::WholeGroup => true,
            SenderFilter::Sender(name) => record.sender == *name,
        }
    }
}

impl std::fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive calendar range for restricting a table.
///
/// # Examples
///
/// ```
/// use chatwrap::core::filter::DateRange;
///
/// # fn main() -> chatwrap::Result<()> {
/// let range = DateRange::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(range.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Include only rows on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only rows on or before this date.
    pub before: Option<NaiveDate>,
}

impl DateRange {
    /// Creates an unbounded range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatwrapError> {
        self.after = Some(parse_iso_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatwrapError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatwrapError> {
        self.before = Some(parse_iso_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if either bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the date lies inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.after.is_none_or(|after| date >= after)
            && self.before.is_none_or(|before| date <= before)
    }
}

fn parse_iso_date(date_str: &str) -> Result<NaiveDate, ChatwrapError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatwrapError::invalid_date(date_str))
}
