//! Unified error types for chatwrap.
//!
//! This module provides a single [`ChatwrapError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Per-line parse failures are not errors.** Lines that do not match the
//!   device grammar become `"Unknown"` rows and are dropped from the table.
//! - **Timestamp mismatches are fatal.** A line that matched the grammar but
//!   whose date or time cannot be read under that grammar's format means the
//!   wrong device format was selected, so the whole build fails.
//! - **Empty aggregations are not errors.** They return empty collections.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatwrap operations.
///
/// # Example
///
/// ```rust
/// use chatwrap::error::Result;
/// use chatwrap::ChatTable;
///
/// fn my_function() -> Result<ChatTable> {
///     // ... operations that may fail
///     Ok(ChatTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatwrapError>;

/// The error type for all chatwrap operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatwrapError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing a report)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A matched line carried a date or time that its grammar cannot read.
    ///
    /// Raised by the table builder. It almost always means the export was
    /// produced by the other device format.
    #[error("Invalid timestamp '{value}' in row {row}. Expected format: {expected}")]
    InvalidTimestamp {
        /// Zero-based index of the offending row among the dated rows
        row: usize,
        /// The date or time text that failed to parse
        value: String,
        /// The chrono format string that was applied
        expected: &'static str,
    },

    /// A device grammar could not be constructed.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The grammar that was being built
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a date-range restriction.
    ///
    /// Date ranges expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the export is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatwrapError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatwrapError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatwrapError {
    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(row: usize, value: impl Into<String>, expected: &'static str) -> Self {
        ChatwrapError::InvalidTimestamp {
            row,
            value: value.into(),
            expected,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatwrapError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatwrapError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatwrapError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatwrapError::Io(_))
    }

    /// Returns `true` if this is a timestamp mismatch raised by the table builder.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, ChatwrapError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatwrapError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatwrapError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
