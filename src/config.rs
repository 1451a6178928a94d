//! Configuration management and validation.
//!
//! Provides the run configuration assembled from command line arguments:
//! where the input comes from, how rows are separated, how a header/schema
//! column count mismatch is handled and where output goes.

use crate::constants::SEPARATOR_ESCAPES;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a header/schema column count mismatch is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderMismatchPolicy {
    /// Ask the user whether to continue
    #[default]
    Prompt,
    /// Continue without asking
    Continue,
}

/// Input handling configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Input file; prompted for when absent
    pub input_path: Option<PathBuf>,

    /// Row separator; prompted for when absent
    pub row_separator: Option<char>,

    /// Header/schema column count mismatch handling
    pub header_mismatch: HeaderMismatchPolicy,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for company files (defaults to the input file's directory)
    pub output_dir: Option<PathBuf>,

    /// Report the files that would be written without writing them
    pub dry_run: bool,
}

/// Main configuration for an enrollment splitting run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Set the input file
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.processing.input_path = Some(path.into());
        self
    }

    /// Set the row separator
    pub fn with_row_separator(mut self, separator: char) -> Self {
        self.processing.row_separator = Some(separator);
        self
    }

    /// Continue past a header/schema column count mismatch without asking
    pub fn with_assume_yes(mut self) -> Self {
        self.processing.header_mismatch = HeaderMismatchPolicy::Continue;
        self
    }

    /// Write company files to `dir` instead of the input file's directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.output_dir = Some(dir.into());
        self
    }

    /// Enable dry run mode
    pub fn with_dry_run(mut self) -> Self {
        self.output.dry_run = true;
        self
    }

    /// Check the configuration before any file is read
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.output.output_dir {
            if dir.is_file() {
                return Err(Error::configuration(format!(
                    "Output path {} is a file, expected a directory",
                    dir.display()
                )));
            }
        }

        if let Some(path) = &self.processing.input_path {
            if path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path {} is a directory, expected a file",
                    path.display()
                )));
            }
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }

    /// Directory company files are written to for the given input file
    pub fn output_directory(&self, input_path: &Path) -> PathBuf {
        if let Some(dir) = &self.output.output_dir {
            return dir.clone();
        }
        match input_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Interpret a row separator as typed by the user
///
/// Accepts exactly one character, or one of the escapes `\n`, `\r`, `\t`
/// and `\\`. Anything else is rejected.
pub fn parse_row_separator(raw: &str) -> Option<char> {
    if let Some((_, separator)) = SEPARATOR_ESCAPES.iter().find(|(escape, _)| *escape == raw) {
        return Some(*separator);
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
