//! Tests for individual row parsing

use super::super::column_mapping::HeaderMapping;
use super::super::header::build_mapping;
use super::super::record_parser::{
    parse_enrollment_record, parse_enrollment_rows, parse_integer_field,
};
use super::fields;
use crate::Error;
use crate::app::models::{Enrollment, SchemaField};

fn user_id_and_version_mapping() -> HeaderMapping {
    [(SchemaField::UserId, 0), (SchemaField::Version, 1)]
        .into_iter()
        .collect()
}

#[test]
fn test_parse_record_string_and_integer_fields() {
    let mapping = user_id_and_version_mapping();
    let enrollment = parse_enrollment_record(&mapping, &fields(&["abc-123", "42"])).unwrap();

    assert_eq!(enrollment.user_id, "abc-123");
    assert_eq!(enrollment.version, 42);
}

#[test]
fn test_parse_record_unmapped_fields_keep_zero_values() {
    let mapping = user_id_and_version_mapping();
    let enrollment = parse_enrollment_record(&mapping, &fields(&["u1", "7"])).unwrap();

    assert_eq!(enrollment.first_name, "");
    assert_eq!(enrollment.last_name, "");
    assert_eq!(enrollment.insurance_company, "");
}

#[test]
fn test_parse_record_full_mapping() {
    let mapping = build_mapping(&fields(&[
        "user_id",
        "first_name",
        "last_name",
        "version",
        "insurance_company",
    ]))
    .unwrap();
    let enrollment =
        parse_enrollment_record(&mapping, &fields(&["u1", "Ada", "Lovelace", "-3", "Acme"]))
            .unwrap();

    assert_eq!(enrollment, Enrollment::new("u1", "Ada", "Lovelace", -3, "Acme"));
}

#[test]
fn test_parse_record_rejects_non_integer_version() {
    let mapping = user_id_and_version_mapping();
    let result = parse_enrollment_record(&mapping, &fields(&["u1", "two"]));

    match result {
        Err(Error::FieldType { field, value }) => {
            assert_eq!(field, "Version");
            assert_eq!(value, "two");
        }
        other => panic!("expected field type error, got {:?}", other),
    }
}

#[test]
fn test_parse_record_never_coerces_empty_integer_to_zero() {
    let mapping = user_id_and_version_mapping();
    assert!(parse_enrollment_record(&mapping, &fields(&["u1", ""])).is_err());
}

#[test]
fn test_parse_integer_field() {
    assert_eq!(parse_integer_field("12", SchemaField::Version).unwrap(), 12);
    assert_eq!(parse_integer_field("+5", SchemaField::Version).unwrap(), 5);
    assert!(parse_integer_field("1.0", SchemaField::Version).is_err());
    assert!(parse_integer_field("99999999999", SchemaField::Version).is_err());
}

#[test]
fn test_parse_rows_returns_one_enrollment_per_row() {
    let mapping = user_id_and_version_mapping();
    let rows = fields(&["first,1", "first.1,2"]);

    let enrollments = parse_enrollment_rows(&mapping, &rows).unwrap();

    assert_eq!(enrollments.len(), 2);
    assert_eq!(enrollments[1].user_id, "first.1");
    assert_eq!(enrollments[1].version, 2);
}

#[test]
fn test_parse_rows_fails_on_first_bad_row() {
    let mapping = user_id_and_version_mapping();
    let rows = fields(&["a,1", "b,x", "c,y"]);

    match parse_enrollment_rows(&mapping, &rows) {
        Err(Error::FieldType { value, .. }) => assert_eq!(value, "x"),
        other => panic!("expected field type error, got {:?}", other),
    }
}

#[test]
fn test_parse_rows_reports_short_row_instead_of_panicking() {
    let mapping = user_id_and_version_mapping();
    let rows = fields(&["a,1", "b"]);

    match parse_enrollment_rows(&mapping, &rows) {
        Err(Error::RowLengthMismatch { expected, rows }) => {
            assert_eq!(expected, 2);
            assert_eq!(rows, vec![2]);
        }
        other => panic!("expected row length error, got {:?}", other),
    }
}
