//! Row and field splitting for enrollment files
//!
//! Rows are separated by a caller-chosen character and fields by a literal
//! comma. There is no quoting: a comma inside a value is always a boundary.

use crate::constants::FIELD_DELIMITER;

/// Split raw file content into rows on `separator`
///
/// Newline sequences embedded in a row are removed, so a `;` separated file
/// laid out one row per line does not leave line break fragments behind.
/// The row itself is not trimmed.
pub fn split_rows(content: &str, separator: char) -> Vec<String> {
    content
        .split(separator)
        .map(|row| row.replace(['\r', '\n'], ""))
        .collect()
}

/// Split one row into comma-separated fields, trimming each field
pub fn split_fields(row: &str) -> Vec<String> {
    row.split(FIELD_DELIMITER)
        .map(|field| field.trim().to_string())
        .collect()
}

/// Number of fields a row splits into
pub fn field_count(row: &str) -> usize {
    row.split(FIELD_DELIMITER).count()
}

/// Drop rows that are empty or whitespace only
///
/// Returns the number of rows removed.
pub fn remove_blank_rows(rows: &mut Vec<String>) -> usize {
    let before = rows.len();
    rows.retain(|row| !row.trim().is_empty());
    before - rows.len()
}
