//! Record processing for parsed enrollments
//!
//! Takes the enrollments of one input file and produces the per-company
//! groups that are written out.
//!
//! # Architecture
//!
//! - [`processor`] - RecordProcessor and pipeline orchestration
//! - [`deduplication`] - Collapsing versions of the same enrollment
//! - [`ordering`] - Company grouping and name ordering
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Deduplication**: keep the highest version per (user id, company)
//! 2. **Grouping**: one group per company, in order of first appearance
//! 3. **Ordering**: each group sorted by last name, then first name
//!
//! # Example Usage
//!
//! ```rust
//! use enrollment_splitter::Enrollment;
//! use enrollment_splitter::app::services::record_processor::RecordProcessor;
//!
//! let enrollments = vec![
//!     Enrollment::new("u1", "Ada", "Lovelace", 1, "Acme"),
//!     Enrollment::new("u1", "Ada", "Lovelace", 2, "Acme"),
//! ];
//! let result = RecordProcessor::new().process_enrollments(enrollments);
//!
//! assert_eq!(result.groups.len(), 1);
//! assert_eq!(result.groups[0].enrollments[0].version, 2);
//! ```

pub mod deduplication;
pub mod ordering;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use ordering::CompanyGroup;
pub use processor::RecordProcessor;
pub use stats::{ProcessingResult, ProcessingStats};

// Re-export utility functions that might be useful externally
pub use deduplication::{analyze_duplicate_patterns, deduplicate_enrollments};
pub use ordering::{distinct_companies, group_by_company, sort_for_company};
