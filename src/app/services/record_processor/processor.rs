//! Record processor pipeline orchestration

use super::deduplication::{analyze_duplicate_patterns, deduplicate_enrollments};
use super::ordering::group_by_company;
use super::stats::{ProcessingResult, ProcessingStats};
use crate::app::models::Enrollment;
use tracing::{debug, info};

/// Turns parsed enrollments into per-company output groups
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordProcessor;

impl RecordProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Deduplicate enrollments, then group and sort them by company
    pub fn process_enrollments(&self, enrollments: Vec<Enrollment>) -> ProcessingResult {
        let mut stats = ProcessingStats::new();
        stats.input_enrollments = enrollments.len();

        let (distinct_keys, duplicate_groups, _) = analyze_duplicate_patterns(&enrollments);
        debug!(
            "{} enrollments share {} keys, {} of them with several versions",
            enrollments.len(),
            distinct_keys,
            duplicate_groups
        );

        let deduplicated = deduplicate_enrollments(enrollments);
        stats.duplicates_removed = stats.input_enrollments - deduplicated.len();

        let groups = group_by_company(&deduplicated);
        stats.companies = groups.len();

        for group in &groups {
            debug!(
                "Company '{}': {} enrollments",
                group.company,
                group.enrollments.len()
            );
        }

        let result = ProcessingResult { groups, stats };
        info!("Processing summary: {}", result.summary());
        result
    }
}
