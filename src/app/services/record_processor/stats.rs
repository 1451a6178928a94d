//! Processing statistics and result structures

use super::ordering::CompanyGroup;

/// Result of processing parsed enrollments
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// One sorted group per company, in order of first appearance
    pub groups: Vec<CompanyGroup>,

    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// Total enrollments across all groups
    pub fn enrollment_count(&self) -> usize {
        self.groups.iter().map(|g| g.enrollments.len()).sum()
    }

    /// One-line summary of the processing run
    pub fn summary(&self) -> String {
        format!(
            "{} enrollments in, {} duplicates collapsed, {} companies",
            self.stats.input_enrollments, self.stats.duplicates_removed, self.stats.companies
        )
    }
}

/// Counters for one processing run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessingStats {
    pub input_enrollments: usize,
    pub duplicates_removed: usize,
    pub companies: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }
}
