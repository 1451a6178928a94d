//! Parsing statistics and result structures for enrollment files

use super::column_mapping::HeaderMapping;
use crate::app::models::Enrollment;

/// Parsing result with enrollments and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed enrollments in file order, before deduplication
    pub enrollments: Vec<Enrollment>,

    /// Trimmed header fields
    pub header: Vec<String>,

    /// Schema mapping built from the header
    pub mapping: HeaderMapping,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Rows produced by splitting on the row separator, header included
    pub total_rows: usize,

    /// Empty or whitespace-only rows dropped after the header
    pub blank_rows_removed: usize,

    /// Number of enrollments parsed
    pub enrollments_parsed: usize,

    /// Header columns that matched a schema field
    pub mapped_fields: usize,

    /// Whether the user accepted a header/schema column count mismatch
    pub column_count_mismatch: bool,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data rows left after removing the header and blank rows
    pub fn data_rows(&self) -> usize {
        self.total_rows
            .saturating_sub(1)
            .saturating_sub(self.blank_rows_removed)
    }
}
