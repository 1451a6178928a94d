//! Tests for structural validation rules

use super::super::validation::{
    ensure_header, ensure_min_rows, ensure_not_empty, mismatched_rows, validate_row_lengths,
};
use super::fields;
use crate::Error;

#[test]
fn test_ensure_not_empty() {
    assert!(ensure_not_empty("a,b;c,d").is_ok());
    assert!(matches!(ensure_not_empty(""), Err(Error::EmptyFile)));
    assert!(matches!(ensure_not_empty(" \n\t\r\n"), Err(Error::EmptyFile)));
}

#[test]
fn test_ensure_min_rows() {
    assert!(ensure_min_rows(&fields(&["header", "row"])).is_ok());
    assert!(matches!(
        ensure_min_rows(&fields(&["header"])),
        Err(Error::InsufficientRows { rows: 1 })
    ));
}

#[test]
fn test_ensure_header() {
    assert!(ensure_header(&fields(&["user_id", "version"])).is_ok());
    assert!(matches!(
        ensure_header(&fields(&["u1", "3"])),
        Err(Error::InvalidHeader { .. })
    ));
}

#[test]
fn test_validate_row_lengths_accepts_uniform_rows() {
    let rows = fields(&["a,b,c", "d,e,f"]);
    assert!(validate_row_lengths(&rows, 3).is_ok());
}

#[test]
fn test_validate_row_lengths_reports_short_row() {
    let rows = fields(&["1,2"]);

    match validate_row_lengths(&rows, 5) {
        Err(Error::RowLengthMismatch { expected, rows }) => {
            assert_eq!(expected, 5);
            assert_eq!(rows, vec![1]);
        }
        other => panic!("expected row length error, got {:?}", other),
    }
}

#[test]
fn test_mismatched_rows_lists_every_offender() {
    let rows = fields(&["a,b", "a", "a,b", "a,b,c", "a,b"]);
    assert_eq!(mismatched_rows(&rows, 2), vec![2, 4]);
}
