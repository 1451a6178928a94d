//! Structural validation of enrollment files
//!
//! Every check here is fatal: the first failure aborts the run before any
//! output is produced.

use super::header::looks_like_header;
use super::rows::field_count;
use crate::constants::MIN_ROW_COUNT;
use crate::{Error, Result};

/// Fail if the file contents are empty or whitespace only
pub fn ensure_not_empty(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(Error::empty_file());
    }
    Ok(())
}

/// Fail unless the split content holds a header row and at least one more row
pub fn ensure_min_rows(rows: &[String]) -> Result<()> {
    if rows.len() < MIN_ROW_COUNT {
        return Err(Error::insufficient_rows(rows.len()));
    }
    Ok(())
}

/// Fail if the assumed header row contains integer tokens
pub fn ensure_header(fields: &[String]) -> Result<()> {
    if !looks_like_header(fields) {
        return Err(Error::invalid_header(fields));
    }
    Ok(())
}

/// Indices of data rows whose field count differs from the header's
///
/// Indices are 1-based with the header counted as row 0.
pub fn mismatched_rows(rows: &[String], header_len: usize) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| field_count(row) != header_len)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Fail if any data row has a different field count than the header,
/// reporting all offending rows at once
pub fn validate_row_lengths(rows: &[String], header_len: usize) -> Result<()> {
    let offending = mismatched_rows(rows, header_len);
    if !offending.is_empty() {
        return Err(Error::row_length_mismatch(header_len, offending));
    }
    Ok(())
}
