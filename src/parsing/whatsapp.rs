//! WhatsApp line grammars.
//!
//! WhatsApp writes different line shapes depending on the exporting device:
//!
//! - Android: `12/1/23, 10:15 PM - Alice: Hello there`
//! - iOS: `[12/01/2023, 10:15:30 PM] Alice: Hello there`
//!
//! Dates are day-first with two- or four-digit years. The meridiem may be
//! separated from the clock by any whitespace, including the narrow no-break
//! space (U+202F) that newer exports use.

use regex::Regex;

use crate::error::{ChatwrapError, Result};
use crate::parser::DeviceFormat;

// 12/1/23, 10:15 PM - Alice: Hello there
const ANDROID_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s*([AaPp][Mm])\s-\s([^:]+):\s(.+)$";

// [12/01/2023, 10:15:30 PM] Alice: Hello there
const IOS_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}:\d{2})\s*([AaPp][Mm])\]\s([^:]+):\s(.+)$";

/// The five captures a grammar extracts from a message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedFields<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub meridiem: &'a str,
    pub sender: &'a str,
    pub message: &'a str,
}

/// A compiled device grammar.
///
/// Selected explicitly from a [`DeviceFormat`]; the parser never tries the
/// other grammar as a fallback.
///
/// # Example
///
/// ```
/// use chatwrap::parser::DeviceFormat;
/// use chatwrap::parsing::Grammar;
///
/// let grammar = Grammar::for_format(DeviceFormat::Android)?;
/// let fields = grammar.parse("12/1/23, 10:15 PM - Alice: Hello there").unwrap();
/// assert_eq!(fields.sender, "Alice");
/// assert_eq!(fields.message, "Hello there");
///
/// // iOS lines are not Android lines
/// assert!(grammar.parse("[12/01/2023, 10:15:30 PM] Alice: Hello").is_none());
/// # Ok::<(), chatwrap::ChatwrapError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Grammar {
    Ios(Regex),
    Android(Regex),
}

impl Grammar {
    /// Compiles the grammar for a device format.
    pub fn for_format(format: DeviceFormat) -> Result<Self> {
        let pattern = match format {
            DeviceFormat::Ios => IOS_PATTERN,
            DeviceFormat::Android => ANDROID_PATTERN,
        };
        let regex = Regex::new(pattern)
            .map_err(|e| ChatwrapError::invalid_format(format.name(), e.to_string()))?;

        Ok(match format {
            DeviceFormat::Ios => Grammar::Ios(regex),
            DeviceFormat::Android => Grammar::Android(regex),
        })
    }

    /// Returns the device format this grammar reads.
    pub fn format(&self) -> DeviceFormat {
        match self {
            Grammar::Ios(_) => DeviceFormat::Ios,
            Grammar::Android(_) => DeviceFormat::Android,
        }
    }

    fn regex(&self) -> &Regex {
        match self {
            Grammar::Ios(regex) | Grammar::Android(regex) => regex,
        }
    }

    /// Extracts the five fields from a line, or `None` if it does not match.
    pub fn parse<'a>(&self, line: &'a str) -> Option<ParsedFields<'a>> {
        let caps = self.regex().captures(line)?;
        Some(ParsedFields {
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            meridiem: caps.get(3)?.as_str(),
            sender: caps.get(4)?.as_str().trim(),
            message: caps.get(5)?.as_str(),
        })
    }

    /// Returns `true` if the line matches this grammar.
    pub fn matches(&self, line: &str) -> bool {
        self.regex().is_match(line)
    }
}

impl DeviceFormat {
    /// chrono format for the joined `"<clock> <meridiem>"` time text.
    pub fn time_format(self) -> &'static str {
        match self {
            DeviceFormat::Ios => "%I:%M:%S %p",
            DeviceFormat::Android => "%I:%M %p",
        }
    }

    /// chrono format for a captured date, chosen by the width of its year.
    pub fn date_format(self, date: &str) -> &'static str {
        let year_digits = date.rsplit('/').next().map_or(0, str::len);
        if year_digits == 4 { "%d/%m/%Y" } else { "%d/%m/%y" }
    }
}
