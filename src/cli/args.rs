//! Command-line argument definitions for the enrollment splitter
//!
//! Both positional arguments are optional: a missing or unusable input path
//! or row separator is asked for interactively.

use crate::config::{Config, parse_row_separator};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// CLI arguments for the enrollment splitter
///
/// Reads a delimited file of insurance enrollments and writes one JSON
/// document per insurance company, keeping only the latest version of each
/// enrollment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "enrollment-splitter",
    version,
    about = "Split an enrollment file into one JSON document per insurance company",
    long_about = "Reads a delimited file of insurance enrollment records, maps its header \
                  columns onto the enrollment schema, keeps the highest version of each \
                  (user id, insurance company) pair and writes each company's enrollments, \
                  sorted by last and first name, to {company}.json."
)]
pub struct Args {
    /// Path to the enrollment file
    ///
    /// Prompted for when not given or when the file does not exist.
    #[arg(value_name = "INPUT")]
    pub input_path: Option<PathBuf>,

    /// Character separating rows in the input file
    ///
    /// A single character such as ';', or one of the escapes \n, \r, \t, \\.
    /// Prompted for when not given or not a single character.
    #[arg(value_name = "SEPARATOR", allow_hyphen_values = true)]
    pub row_separator: Option<String>,

    /// Directory for the company files
    ///
    /// Created if it doesn't exist. Defaults to the input file's directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory for the company files (default: input file's directory)"
    )]
    pub output_path: Option<PathBuf>,

    /// Continue past a header/schema column count mismatch without asking
    #[arg(
        short = 'y',
        long = "yes",
        help = "Continue without asking when header and schema column counts differ"
    )]
    pub assume_yes: bool,

    /// Perform a dry run without writing output
    ///
    /// Parses and processes the whole file, then reports the files that
    /// would be written.
    #[arg(
        long = "dry-run",
        help = "Show which files would be written without creating them"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Row separator from the command line, if usable
    ///
    /// An unusable value is reported and treated as absent, so the user is
    /// asked for a separator instead.
    pub fn get_row_separator(&self) -> Option<char> {
        let raw = self.row_separator.as_deref()?;
        let separator = parse_row_separator(raw);
        if separator.is_none() {
            warn!(
                "Ignoring row separator '{}': expected a single character or one of \\n, \\r, \\t, \\\\",
                raw
            );
        }
        separator
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(path) = &self.input_path {
            config = config.with_input_path(path);
        }
        if let Some(separator) = self.get_row_separator() {
            config = config.with_row_separator(separator);
        }
        if let Some(dir) = &self.output_path {
            config = config.with_output_dir(dir);
        }
        if self.assume_yes {
            config = config.with_assume_yes();
        }
        if self.dry_run {
            config = config.with_dry_run();
        }
        config
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input_path: None,
            row_separator: None,
            output_path: None,
            assume_yes: false,
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}
