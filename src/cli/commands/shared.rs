//! Shared components for CLI commands
//!
//! This module contains the run statistics, logging setup and configuration
//! loading used by the command runner.

use crate::cli::args::Args;
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Statistics for one enrollment splitting run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// File that was read
    pub input_path: PathBuf,
    /// Directory company files were written to
    pub output_dir: PathBuf,
    /// Rows after splitting, header included
    pub rows_read: usize,
    /// Blank data rows dropped before parsing
    pub blank_rows_removed: usize,
    /// Enrollments parsed from the data rows
    pub enrollments_parsed: usize,
    /// Older versions dropped by deduplication
    pub duplicates_removed: usize,
    /// Number of company files written (or planned)
    pub companies_written: usize,
    /// Output file names and sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
    /// Whether files were only planned, not written
    pub dry_run: bool,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let init_result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build and validate the run configuration from the command line
pub fn load_configuration(args: &Args) -> Result<Config> {
    let config = args.to_config();
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_default() {
        let stats = RunStats::default();
        assert_eq!(stats.companies_written, 0);
        assert_eq!(stats.total_output_size(), 0);
        assert!(!stats.dry_run);
    }

    #[test]
    fn test_run_stats_total_output_size() {
        let stats = RunStats {
            output_sizes: vec![
                ("Acme.json".to_string(), 1024),
                ("Globex.json".to_string(), 2048),
            ],
            ..RunStats::default()
        };
        assert_eq!(stats.total_output_size(), 3072);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(RunStats::format_size(512), "512 B");
        assert_eq!(RunStats::format_size(1024), "1.00 KB");
        assert_eq!(RunStats::format_size(1536), "1.50 KB");
        assert_eq!(RunStats::format_size(1048576), "1.00 MB");
    }

    #[test]
    fn test_load_configuration() {
        let args = Args {
            input_path: Some(PathBuf::from("input.csv")),
            row_separator: Some("|".to_string()),
            dry_run: true,
            ..Args::default()
        };

        let config = load_configuration(&args).unwrap();
        assert_eq!(
            config.processing.input_path,
            Some(PathBuf::from("input.csv"))
        );
        assert_eq!(config.processing.row_separator, Some('|'));
        assert!(config.output.dry_run);
    }

    #[test]
    fn test_load_configuration_drops_invalid_separator() {
        let args = Args {
            row_separator: Some(";;".to_string()),
            ..Args::default()
        };

        let config = load_configuration(&args).unwrap();
        assert!(config.processing.row_separator.is_none());
    }

    #[test]
    fn test_load_configuration_rejects_file_as_output() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = Args {
            output_path: Some(file.path().to_path_buf()),
            ..Args::default()
        };

        assert!(load_configuration(&args).is_err());
    }
}
