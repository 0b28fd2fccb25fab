//! Delimited-text codec
//!
//! Converts between row sequences and the line-oriented text format: one
//! header line naming the fields, then one line per row. There is no quoting
//! or escaping, so a value whose text contains the delimiter is the caller's
//! responsibility. Null encodes as the empty string and an empty slot
//! decodes as an empty string; null cells therefore do not survive a round
//! trip.

use crate::error::{Error, Result};
use crate::model::{CellValue, Row};

/// Encode rows as newline-terminated text lines, header first.
///
/// Expects a rectangular row sequence; the header is derived from the first
/// row's fields. Fails with [`Error::EmptyDataset`] when `rows` is empty.
pub fn encode(rows: &[Row], delimiter: &str) -> Result<Vec<String>> {
    let first = rows.first().ok_or(Error::EmptyDataset)?;

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header: Vec<&str> = first.fields().collect();
    lines.push(format!("{}\n", header.join(delimiter)));

    for row in rows {
        let values: Vec<String> = row
            .iter()
            .map(|(_, value)| value.display().into_owned())
            .collect();
        lines.push(format!("{}\n", values.join(delimiter)));
    }
    Ok(lines)
}

/// Decode text lines into rows.
///
/// The first line is the header. Values pair positionally with the header
/// fields; a ragged line is truncated to the shorter of the two lengths.
/// Every decoded cell is a string; an empty slot becomes an empty string,
/// never null.
pub fn decode<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Vec<Row> {
    let Some(header) = lines.first() else {
        return Vec::new();
    };
    let fields: Vec<&str> = header.as_ref().trim().split(delimiter).collect();

    let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));
    for line in &lines[1..] {
        let row: Row = fields
            .iter()
            .zip(line.as_ref().trim().split(delimiter))
            .map(|(field, value)| (*field, CellValue::from(value)))
            .collect();
        rows.push(row);
    }
    rows
}
