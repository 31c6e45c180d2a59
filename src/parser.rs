//! Line parser for WhatsApp text exports.
//!
//! A [`LineParser`] is built for one [`DeviceFormat`] and turns each line of
//! an export into a [`ParsedLine`]. Lines that do not match the grammar are
//! kept as `"Unknown"` rows; the table builder drops them later.
//!
//! # Example
//!
//! ```rust
//! use chatwrap::parser::{DeviceFormat, LineParser};
//!
//! # fn main() -> chatwrap::Result<()> {
//! let parser = LineParser::new(DeviceFormat::Android)?;
//! let outcome = parser.parse_str(
//!     "12/1/23, 10:15 PM - Alice: Hello there\n\
//!      and a second line\n\
//!      \n\
//!      12/1/23, 10:16 PM - Bob: Hi",
//! );
//!
//! assert_eq!(outcome.lines.len(), 3);
//! assert_eq!(outcome.unmatched, 1);
//! assert_eq!(outcome.matched(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Device Selection
//!
//! The device format is never guessed. Use [`DeviceFormat`] parsed from user
//! input:
//!
//! ```rust
//! use chatwrap::parser::DeviceFormat;
//! use std::str::FromStr;
//!
//! assert_eq!(DeviceFormat::from_str("android").unwrap(), DeviceFormat::Android);
//! assert_eq!(DeviceFormat::from_str("iPhone").unwrap(), DeviceFormat::Ios);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parsing::Grammar;
use crate::record::ParsedLine;

/// Left-to-right mark that iOS prepends to attachment lines.
const LEFT_TO_RIGHT_MARK: char = '\u{200e}';

/// Exporting device, which decides the line grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFormat {
    /// `[12/01/2023, 10:15:30 PM] Alice: Hello`
    #[serde(alias = "iphone")]
    Ios,

    /// `12/1/23, 10:15 PM - Alice: Hello`
    #[default]
    #[serde(alias = "aos")]
    Android,
}

impl DeviceFormat {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            DeviceFormat::Ios => "iOS",
            DeviceFormat::Android => "Android",
        }
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["ios", "iphone", "android", "aos"]
    }

    /// Returns all device formats.
    pub fn all() -> &'static [DeviceFormat] {
        &[DeviceFormat::Ios, DeviceFormat::Android]
    }
}

impl std::fmt::Display for DeviceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DeviceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ios" | "iphone" => Ok(DeviceFormat::Ios),
            "android" | "aos" => Ok(DeviceFormat::Android),
            _ => Err(format!(
                "Unknown device format: '{}'. Expected one of: {}",
                s,
                DeviceFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion from CLI Device to DeviceFormat (only with cli feature)
#[cfg(feature = "cli")]
impl From<crate::cli::Device> for DeviceFormat {
    fn from(device: crate::cli::Device) -> Self {
        match device {
            crate::cli::Device::Ios => DeviceFormat::Ios,
            crate::cli::Device::Android => DeviceFormat::Android,
        }
    }
}

/// Result of parsing a whole export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// One entry per non-empty input line, in input order.
    pub lines: Vec<ParsedLine>,

    /// Number of non-empty lines the grammar rejected. Diagnostic only.
    pub unmatched: usize,
}

impl ParseOutcome {
    /// Number of lines the grammar accepted.
    pub fn matched(&self) -> usize {
        self.lines.len() - self.unmatched
    }
}

/// Parser bound to one device grammar.
#[derive(Debug, Clone)]
pub struct LineParser {
    grammar: Grammar,
}

impl LineParser {
    /// Creates a parser for the given device format.
    pub fn new(format: DeviceFormat) -> Result<Self> {
        Ok(Self {
            grammar: Grammar::for_format(format)?,
        })
    }

    /// Returns the device format of this parser.
    pub fn format(&self) -> DeviceFormat {
        self.grammar.format()
    }

    /// Parses one line.
    ///
    /// Returns `None` for empty or whitespace-only lines. Lines that do not
    /// match the grammar come back as [`ParsedLine::unknown`].
    pub fn parse_line(&self, line: &str) -> Option<ParsedLine> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let candidate = trimmed.trim_start_matches(LEFT_TO_RIGHT_MARK);
        Some(match self.grammar.parse(candidate) {
            Some(fields) => ParsedLine::matched(&fields),
            None => ParsedLine::unknown(trimmed),
        })
    }

    /// Parses every line of an export.
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for line in content.lines() {
            if let Some(parsed) = self.parse_line(line) {
                if !parsed.is_dated() {
                    outcome.unmatched += 1;
                }
                outcome.lines.push(parsed);
            }
        }

        tracing::debug!(
            format = %self.format(),
            matched = outcome.matched(),
            unmatched = outcome.unmatched,
            "parsed export"
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::UNKNOWN_SENDER;
    use std::str::FromStr;

    #[test]
    fn test_device_from_str() {
        assert_eq!(DeviceFormat::from_str("ios").unwrap(), DeviceFormat::Ios);
        assert_eq!(DeviceFormat::from_str("IOS").unwrap(), DeviceFormat::Ios);
        assert_eq!(DeviceFormat::from_str("iphone").unwrap(), DeviceFormat::Ios);
        assert_eq!(
            DeviceFormat::from_str("android").unwrap(),
            DeviceFormat::Android
        );
        assert_eq!(DeviceFormat::from_str("aos").unwrap(), DeviceFormat::Android);
    }

    #[test]
    fn test_device_from_str_error() {
        let err = DeviceFormat::from_str("symbian").unwrap_err();
        assert!(err.contains("symbian"));
        assert!(err.contains("android"));
    }

    #[test]
    fn test_device_display() {
        assert_eq!(DeviceFormat::Ios.to_string(), "iOS");
        assert_eq!(DeviceFormat::Android.to_string(), "Android");
    }

    #[test]
    fn test_parse_line_android() {
        let parser = LineParser::new(DeviceFormat::Android).unwrap();
        let line = parser
            .parse_line("12/1/23, 10:15 PM - Alice : Hello there")
            .unwrap();
        assert_eq!(line.date.as_deref(), Some("12/1/23"));
        assert_eq!(line.time.as_deref(), Some("10:15 PM"));
        assert_eq!(line.sender, "Alice");
        assert_eq!(line.message, "Hello there");
    }

    #[test]
    fn test_parse_line_ios_with_ltr_mark() {
        let parser = LineParser::new(DeviceFormat::Ios).unwrap();
        let line = parser
            .parse_line("\u{200e}[12/01/2023, 10:15:30 PM] Alice: \u{200e}image omitted")
            .unwrap();
        assert_eq!(line.sender, "Alice");
        assert_eq!(line.time.as_deref(), Some("10:15:30 PM"));
    }

    #[test]
    fn test_parse_line_unmatched() {
        let parser = LineParser::new(DeviceFormat::Android).unwrap();
        let line = parser.parse_line("  see you tomorrow  ").unwrap();
        assert_eq!(line.sender, UNKNOWN_SENDER);
        assert_eq!(line.message, "see you tomorrow");
        assert!(!line.is_dated());
    }

    #[test]
    fn test_parse_line_empty() {
        let parser = LineParser::new(DeviceFormat::Android).unwrap();
        assert!(parser.parse_line("").is_none());
        assert!(parser.parse_line("   \t").is_none());
    }

    #[test]
    fn test_parse_str_counts_unmatched() {
        let parser = LineParser::new(DeviceFormat::Android).unwrap();
        let content = "12/1/23, 10:15 PM - Messages and calls are end-to-end encrypted\n\
                       12/1/23, 10:15 PM - Alice: Hi\r\n\
                       \n\
                       second line of Alice\n\
                       12/1/23, 10:17 PM - Bob: Hey";
        let outcome = parser.parse_str(content);
        assert_eq!(outcome.lines.len(), 4);
        assert_eq!(outcome.unmatched, 2);
        assert_eq!(outcome.matched(), 2);
    }

    #[test]
    fn test_wrong_device_matches_nothing() {
        let parser = LineParser::new(DeviceFormat::Ios).unwrap();
        let outcome = parser.parse_str("12/1/23, 10:15 PM - Alice: Hi\n12/1/23, 10:16 PM - Bob: Yo");
        assert_eq!(outcome.unmatched, 2);
        assert_eq!(outcome.matched(), 0);
    }
}
