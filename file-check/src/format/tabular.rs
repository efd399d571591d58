//! Delimited-tabular (CSV) checker.
//!
//! Rows are read lazily and rescanned from the first row for every expected
//! value. A row matches when the value is a substring of the row's cells
//! joined by the delimiter, so a value may span adjacent cells.

use std::io::{self, Read, Seek};

use csv::{ByteRecord, Position, Reader, ReaderBuilder};

/// Field delimiter used both for parsing and for rendering a row.
pub const DELIMITER: u8 = b',';
const DELIMITER_STR: &str = ",";

/// Build a CSV reader over `source`: no header row, ragged rows allowed.
#[must_use]
pub fn tabular_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(source)
}

/// Render a parsed row as its cells joined by the delimiter.
#[must_use]
pub fn render_row(record: &ByteRecord) -> String {
    let cells: Vec<_> = record.iter().map(String::from_utf8_lossy).collect();
    cells.join(DELIMITER_STR)
}

/// Count how many of `values` occur in some row of `reader`.
///
/// # Errors
///
/// Returns an I/O error if the source cannot be rewound or read.
pub fn check_tabular<R>(values: &[String], reader: &mut Reader<R>) -> io::Result<usize>
where
    R: Read + Seek,
{
    let mut found = 0;
    let mut record = ByteRecord::new();
    for value in values {
        reader.seek(Position::new())?;
        while reader.read_byte_record(&mut record)? {
            if render_row(&record).contains(value.as_str()) {
                found += 1;
                break;
            }
        }
    }
    Ok(found)
}
