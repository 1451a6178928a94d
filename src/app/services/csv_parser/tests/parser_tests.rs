//! Tests for the parsing pipeline over whole files

use super::super::parser::{AssumeYes, EnrollmentCsvParser};
use super::{RecordingConfirmation, STANDARD_HEADER, create_test_enrollment_csv, join_rows};
use crate::Error;
use crate::app::models::{Enrollment, SchemaField};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_content_semicolon_file() {
    let parser = EnrollmentCsvParser::new(';');
    let result = parser
        .parse_content(&create_test_enrollment_csv(), &mut AssumeYes)
        .unwrap();

    assert_eq!(result.enrollments.len(), 4);
    assert_eq!(
        result.enrollments[0],
        Enrollment::new("u1", "Ada", "Lovelace", 1, "Acme")
    );
    assert_eq!(result.mapping.len(), 5);
    assert_eq!(result.stats.total_rows, 5);
    assert_eq!(result.stats.enrollments_parsed, 4);
    assert!(!result.stats.column_count_mismatch);
}

#[test]
fn test_parse_content_newline_file_with_trailing_newline() {
    let content = format!(
        "{}\nu1,Ada,Lovelace,1,Acme\n\nu2,Alan,Turing,2,Globex\n",
        STANDARD_HEADER
    );
    let parser = EnrollmentCsvParser::new('\n');
    let result = parser.parse_content(&content, &mut AssumeYes).unwrap();

    assert_eq!(result.enrollments.len(), 2);
    assert_eq!(result.stats.blank_rows_removed, 2);
    assert_eq!(result.stats.data_rows(), 2);
}

#[test]
fn test_parse_content_empty_file() {
    let parser = EnrollmentCsvParser::new(';');
    assert!(matches!(
        parser.parse_content("   \n", &mut AssumeYes),
        Err(Error::EmptyFile)
    ));
}

#[test]
fn test_parse_content_single_row() {
    let parser = EnrollmentCsvParser::new(';');
    assert!(matches!(
        parser.parse_content(STANDARD_HEADER, &mut AssumeYes),
        Err(Error::InsufficientRows { rows: 1 })
    ));
}

#[test]
fn test_parse_content_data_row_in_header_position() {
    let parser = EnrollmentCsvParser::new(';');
    let content = join_rows(&["u1,Ada,Lovelace,1,Acme", "u2,Alan,Turing,2,Globex"], ';');

    assert!(matches!(
        parser.parse_content(&content, &mut AssumeYes),
        Err(Error::InvalidHeader { .. })
    ));
}

#[test]
fn test_parse_content_row_length_mismatch() {
    let parser = EnrollmentCsvParser::new(';');
    let content = join_rows(&[STANDARD_HEADER, "1,2"], ';');

    match parser.parse_content(&content, &mut AssumeYes) {
        Err(Error::RowLengthMismatch { rows, .. }) => assert_eq!(rows, vec![1]),
        other => panic!("expected row length error, got {:?}", other),
    }
}

#[test]
fn test_parse_content_bad_version_fails_whole_file() {
    let parser = EnrollmentCsvParser::new(';');
    let content = join_rows(
        &[STANDARD_HEADER, "u1,Ada,Lovelace,1,Acme", "u2,Alan,Turing,two,Globex"],
        ';',
    );

    assert!(matches!(
        parser.parse_content(&content, &mut AssumeYes),
        Err(Error::FieldType { .. })
    ));
}

#[test]
fn test_column_count_mismatch_asks_for_confirmation() {
    let parser = EnrollmentCsvParser::new(';');
    let content = join_rows(&["user_id,version,insurance_company", "u1,2,Acme"], ';');
    let mut confirmation = RecordingConfirmation::answering(true);

    let result = parser.parse_content(&content, &mut confirmation).unwrap();

    assert_eq!(confirmation.requests, vec![(3, 5)]);
    assert!(result.stats.column_count_mismatch);
    assert_eq!(
        result.enrollments,
        vec![Enrollment::new("u1", "", "", 2, "Acme")]
    );
    assert!(!result.mapping.has_field(SchemaField::FirstName));
}

#[test]
fn test_column_count_mismatch_declined_aborts() {
    let parser = EnrollmentCsvParser::new(';');
    let content = join_rows(&["user_id,version", "u1,2"], ';');
    let mut confirmation = RecordingConfirmation::answering(false);

    assert!(matches!(
        parser.parse_content(&content, &mut confirmation),
        Err(Error::UserAbort)
    ));
}

#[test]
fn test_matching_column_count_does_not_ask() {
    let parser = EnrollmentCsvParser::new(';');
    let mut confirmation = RecordingConfirmation::answering(false);

    parser
        .parse_content(&create_test_enrollment_csv(), &mut confirmation)
        .unwrap();

    assert!(confirmation.requests.is_empty());
}

#[test]
fn test_header_without_data_rows_parses_to_nothing() {
    let parser = EnrollmentCsvParser::new(';');
    let content = format!("{};  ", STANDARD_HEADER);

    let result = parser.parse_content(&content, &mut AssumeYes).unwrap();
    assert!(result.enrollments.is_empty());
}

#[tokio::test]
async fn test_parse_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", create_test_enrollment_csv()).unwrap();

    let parser = EnrollmentCsvParser::new(';');
    let result = parser
        .parse_file(temp_file.path(), &mut AssumeYes)
        .await
        .unwrap();

    assert_eq!(result.enrollments.len(), 4);
}

#[tokio::test]
async fn test_parse_missing_file() {
    let parser = EnrollmentCsvParser::new(';');
    let result = parser
        .parse_file(std::path::Path::new("/nonexistent/enrollments.csv"), &mut AssumeYes)
        .await;

    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
