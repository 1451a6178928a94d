//! Core enrollment file parser
//!
//! Runs the validation rules, header matching and row parsing in order over
//! the whole file held in memory.

use std::path::Path;
use tracing::{debug, info, warn};

use super::header::build_mapping;
use super::record_parser::parse_enrollment_rows;
use super::rows::{remove_blank_rows, split_fields, split_rows};
use super::stats::{ParseResult, ParseStats};
use super::validation::{ensure_header, ensure_min_rows, ensure_not_empty, validate_row_lengths};
use crate::app::models::ENROLLMENT_SCHEMA;
use crate::{Error, Result};

/// Decides whether to go on when the header has a different number of
/// columns than the enrollment schema has fields
pub trait ColumnCountConfirmation {
    /// Return `Ok(false)` to abort the run
    fn confirm_column_count(&mut self, header_count: usize, schema_count: usize) -> Result<bool>;
}

/// Always continues past a column count mismatch
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ColumnCountConfirmation for AssumeYes {
    fn confirm_column_count(&mut self, header_count: usize, schema_count: usize) -> Result<bool> {
        info!(
            "Continuing with {} header columns for {} schema fields",
            header_count, schema_count
        );
        Ok(true)
    }
}

/// Enrollment file parser for a given row separator
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentCsvParser {
    row_separator: char,
}

impl EnrollmentCsvParser {
    pub fn new(row_separator: char) -> Self {
        Self { row_separator }
    }

    pub fn row_separator(&self) -> char {
        self.row_separator
    }

    /// Read and parse an enrollment file
    pub async fn parse_file(
        &self,
        file_path: &Path,
        confirmation: &mut dyn ColumnCountConfirmation,
    ) -> Result<ParseResult> {
        info!("Parsing enrollment file: {}", file_path.display());

        if !file_path.is_file() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_content(&content, confirmation)
    }

    /// Parse enrollment file contents
    pub fn parse_content(
        &self,
        content: &str,
        confirmation: &mut dyn ColumnCountConfirmation,
    ) -> Result<ParseResult> {
        let mut stats = ParseStats::new();

        ensure_not_empty(content)?;

        let mut rows = split_rows(content, self.row_separator);
        stats.total_rows = rows.len();
        ensure_min_rows(&rows)?;

        let header = split_fields(&rows[0]);
        ensure_header(&header)?;

        if header.len() != ENROLLMENT_SCHEMA.len() {
            warn!(
                "Header has {} columns but the enrollment schema has {} fields",
                header.len(),
                ENROLLMENT_SCHEMA.len()
            );
            if !confirmation.confirm_column_count(header.len(), ENROLLMENT_SCHEMA.len())? {
                return Err(Error::user_abort());
            }
            stats.column_count_mismatch = true;
        }

        rows.remove(0);
        stats.blank_rows_removed = remove_blank_rows(&mut rows);
        if rows.is_empty() {
            warn!("File has a header but no data rows");
        }

        validate_row_lengths(&rows, header.len())?;

        let mapping = build_mapping(&header)?;
        stats.mapped_fields = mapping.len();
        for field in ENROLLMENT_SCHEMA {
            if !mapping.has_field(field) {
                warn!(
                    "No header column matches {}; it is left empty in every record",
                    field
                );
            }
        }
        debug!(
            "Mapped {} of {} schema fields from header: {:?}",
            mapping.len(),
            ENROLLMENT_SCHEMA.len(),
            header
        );

        let enrollments = parse_enrollment_rows(&mapping, &rows)?;
        stats.enrollments_parsed = enrollments.len();

        info!(
            "Parsed {} enrollments from {} data rows ({} rows read)",
            stats.enrollments_parsed,
            stats.data_rows(),
            stats.total_rows
        );

        Ok(ParseResult {
            enrollments,
            header,
            mapping,
            stats,
        })
    }
}
