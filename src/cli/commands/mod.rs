//! Command implementations for the enrollment splitter CLI
//!
//! This module contains the command execution logic, the run summary and
//! error reporting for the CLI interface.

pub mod process;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Args;
use crate::cli::input::StdConsole;
use shared::{load_configuration, setup_logging};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Main command runner for the enrollment splitter
///
/// Sets up logging, builds the configuration from `args`, runs the
/// interactive processing workflow on stdin/stdout and prints the summary
/// unless quiet mode is on.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<RunStats> {
    setup_logging(&args)?;

    info!("Starting enrollment splitter");
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    let mut console = StdConsole;
    let stats = process::run_process(config, &mut console, &cancellation_token).await?;

    if !args.quiet {
        process::print_summary(&stats);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_re_export() {
        let stats = RunStats::default();
        assert_eq!(stats.enrollments_parsed, 0);
        assert_eq!(stats.total_output_size(), 0);
    }
}
