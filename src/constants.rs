//! Application constants for the enrollment splitter
//!
//! This module contains parsing rules, output layout constants and
//! default values used throughout the application.

// =============================================================================
// Input Parsing
// =============================================================================

/// Field separator within a row. Quoting and escaping are not supported.
pub const FIELD_DELIMITER: char = ',';

/// Number of leading characters of a schema field name compared
/// (case-insensitively) against the start of each header column
pub const HEADER_PREFIX_LEN: usize = 4;

/// A file needs at least a header row and one data row
pub const MIN_ROW_COUNT: usize = 2;

/// Escape sequences accepted where a single row separator character is expected
pub const SEPARATOR_ESCAPES: &[(&str, char)] = &[
    ("\\n", '\n'),
    ("\\r", '\r'),
    ("\\t", '\t'),
    ("\\\\", '\\'),
];

// =============================================================================
// Output Layout
// =============================================================================

/// Key of the array wrapping all records in an output document
pub const DATA_KEY: &str = "data";

/// Extension of the per-company output files
pub const OUTPUT_EXTENSION: &str = "json";

/// Line terminator for the structural lines of an output document
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Terminator for a field line that is followed by another field
pub const FIELD_SEPARATOR_LINE_END: &str = ",\n";

/// Terminator for the last field line of a record
pub const FIELD_LAST_LINE_END: &str = "\n";

/// Prefix for in-flight temporary files in the output directory
pub const TEMP_FILE_PREFIX: &str = ".enrollment-splitter-";

/// Permission bits for a newly created company file
pub const OUTPUT_FILE_MODE: u32 = 0o644;

// =============================================================================
// Logging
// =============================================================================

/// Tracing target used when building the default log filter
pub const LOG_TARGET: &str = "enrollment_splitter";

/// Log level when neither verbose nor quiet is requested
pub const DEFAULT_LOG_LEVEL: &str = "warn";
