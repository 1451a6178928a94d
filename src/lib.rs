//! Enrollment Splitter Library
//!
//! A Rust library for converting a delimited file of insurance enrollment
//! records into one JSON document per insurance company.
//!
//! This library provides tools for:
//! - Splitting raw file content into rows and comma-separated fields
//! - Mapping header columns onto the fixed enrollment schema by name prefix
//! - Parsing and validating rows with strict integer coercion
//! - Collapsing multiple versions of the same enrollment to the latest one
//! - Ordering each company's enrollments and writing them out atomically

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_parser;
        pub mod json_writer;
        pub mod record_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Enrollment, FieldType, SchemaField};
pub use config::Config;

/// Result type alias for the enrollment splitter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for enrollment processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// File contents were empty or whitespace only
    #[error("Csv file cannot be empty")]
    EmptyFile,

    /// Fewer than a header row plus one data row
    #[error("Csv file must have more than 1 row (found {rows})")]
    InsufficientRows { rows: usize },

    /// The assumed header row contains integer tokens
    #[error("First row of CSV file must contain valid headers, found: {header}")]
    InvalidHeader { header: String },

    /// Data rows whose field count differs from the header
    #[error(
        "Header row cannot be different length than other rows. Rows which require fixing (with header row being 0): {}",
        join_indices(.rows)
    )]
    RowLengthMismatch { expected: usize, rows: Vec<usize> },

    /// An integer-typed field could not be parsed
    #[error("CSV file invalid. {field} must be an integer, found '{value}'")]
    FieldType { field: String, value: String },

    /// The user declined to continue past a header/schema count mismatch
    #[error("You have chosen to exit the program and fix the CSV File.")]
    UserAbort,

    /// A company name cannot be used as an output file name
    #[error("Cannot write output for insurance company '{name}': {reason}")]
    InvalidOutputName { name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

fn join_indices(rows: &[usize]) -> String {
    rows.iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an empty file error
    pub fn empty_file() -> Self {
        Self::EmptyFile
    }

    /// Create an insufficient rows error
    pub fn insufficient_rows(rows: usize) -> Self {
        Self::InsufficientRows { rows }
    }

    /// Create an invalid header error from the offending header fields
    pub fn invalid_header(fields: &[String]) -> Self {
        Self::InvalidHeader {
            header: fields.join(","),
        }
    }

    /// Create a row length mismatch error listing every offending row
    pub fn row_length_mismatch(expected: usize, rows: Vec<usize>) -> Self {
        Self::RowLengthMismatch { expected, rows }
    }

    /// Create a field type error
    pub fn field_type(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldType {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a user abort error
    pub fn user_abort() -> Self {
        Self::UserAbort
    }

    /// Create an invalid output name error
    pub fn invalid_output_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOutputName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for failures caused by the contents of the input file or the
    /// user's answer to a validation prompt
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyFile
                | Self::InsufficientRows { .. }
                | Self::InvalidHeader { .. }
                | Self::RowLengthMismatch { .. }
                | Self::FieldType { .. }
                | Self::UserAbort
                | Self::InvalidOutputName { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
