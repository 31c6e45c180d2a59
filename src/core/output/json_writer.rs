//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::AnalysisReport;
use crate::error::Result;

/// Writes the report to a file as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "selection": "Whole Group",
///   "stats": { "total_messages": 2, "total_words": 5, "total_media": 0 },
///   "top_words": [["there", 3], ["hi", 1]],
///   ...
/// }
/// ```
pub fn write_report_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_report_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_report_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
