//! Parser for delimited enrollment files
//!
//! Turns raw file content into enrollment records. Rows are split on a
//! configurable separator character and fields on a literal comma; the first
//! row is taken as the header and matched against the enrollment schema.
//!
//! ## Architecture
//!
//! - [`parser`] - Parsing orchestration and file handling
//! - [`rows`] - Row and field splitting
//! - [`validation`] - Structural checks on the split file
//! - [`header`] - Header recognition and schema prefix matching
//! - [`column_mapping`] - Schema field to column index mapping
//! - [`record_parser`] - Individual row parsing and type coercion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use enrollment_splitter::app::services::csv_parser::{AssumeYes, EnrollmentCsvParser};
//!
//! # fn example() -> enrollment_splitter::Result<()> {
//! let parser = EnrollmentCsvParser::new(';');
//! let content = "user_id,first_name,last_name,version,insurance_company;\
//!                u1,Ada,Lovelace,1,Acme";
//! let result = parser.parse_content(content, &mut AssumeYes)?;
//!
//! assert_eq!(result.enrollments.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod rows;
pub mod stats;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::HeaderMapping;
pub use parser::{AssumeYes, ColumnCountConfirmation, EnrollmentCsvParser};
pub use stats::{ParseResult, ParseStats};
