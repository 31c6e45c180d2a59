//! CSV table writer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::record::ChatRecord;
use crate::table::ChatTable;

/// Header row of the table CSV.
pub const TABLE_COLUMNS: [&str; 10] = [
    "Date",
    "Time",
    "Sender",
    "Message",
    "month",
    "day",
    "day_name",
    "year",
    "hour_with_ampm",
    "minute",
];

/// Writes the enriched table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: [`TABLE_COLUMNS`]
/// - `Date` as `YYYY-MM-DD`, `Time` as 24-hour `HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_table_csv(table: &ChatTable, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(table, file)
}

/// Same as [`write_table_csv`], returning the CSV text.
pub fn to_table_csv(table: &ChatTable) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(table, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: io::Write>(table: &ChatTable, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(TABLE_COLUMNS)?;
    for record in table {
        writer.write_record(build_record(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(record: &ChatRecord) -> [String; 10] {
    [
        record.date.format("%Y-%m-%d").to_string(),
        record.time.format("%H:%M:%S").to_string(),
        record.sender.clone(),
        record.message.clone(),
        record.month.clone(),
        record.day.to_string(),
        record.day_name.clone(),
        record.year.to_string(),
        record.hour_with_ampm.clone(),
        record.minute.to_string(),
    ]
}
