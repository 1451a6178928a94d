//! Test utilities for enrollment parser testing
//!
//! Common fixtures and a recording confirmation used across the parser
//! test modules.

use super::parser::ColumnCountConfirmation;
use crate::Result;

mod parser_tests;
mod record_parser_tests;
mod validation_tests;

/// Standard header matching every schema field
pub const STANDARD_HEADER: &str = "user_id,first_name,last_name,version,insurance_company";

/// Confirmation that answers with a fixed value and records each request
#[derive(Debug, Default)]
pub struct RecordingConfirmation {
    pub answer: bool,
    pub requests: Vec<(usize, usize)>,
}

impl RecordingConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            requests: Vec::new(),
        }
    }
}

impl ColumnCountConfirmation for RecordingConfirmation {
    fn confirm_column_count(&mut self, header_count: usize, schema_count: usize) -> Result<bool> {
        self.requests.push((header_count, schema_count));
        Ok(self.answer)
    }
}

/// Helper to build file content from rows joined by `separator`
pub fn join_rows(rows: &[&str], separator: char) -> String {
    rows.join(&separator.to_string())
}

/// Helper to turn string slices into owned fields
pub fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Helper to create a typical semicolon separated file, one row per line
pub fn create_test_enrollment_csv() -> String {
    [
        STANDARD_HEADER,
        "u1, Ada, Lovelace, 1, Acme",
        "u2, Alan, Turing, 1, Globex",
        "u1, Ada, Lovelace, 2, Acme",
        "u3, Grace, Hopper, 4, Acme",
    ]
    .join(";\n")
}
