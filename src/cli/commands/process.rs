//! Process command implementation for the enrollment splitter
//!
//! This module contains the complete workflow: collecting any missing input
//! interactively, parsing the enrollment file, collapsing versions, and
//! writing (or planning) one document per insurance company.

use super::shared::RunStats;
use crate::app::services::csv_parser::{AssumeYes, EnrollmentCsvParser};
use crate::app::services::json_writer::JsonWriter;
use crate::app::services::record_processor::RecordProcessor;
use crate::cli::input::{Console, PromptConfirmation, prompt_input_path, prompt_row_separator};
use crate::config::{Config, HeaderMismatchPolicy};
use crate::Result;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Process command runner
///
/// This function orchestrates the entire workflow:
/// 1. Resolve the input file and row separator, prompting where needed
/// 2. Parse and validate the file
/// 3. Deduplicate and group enrollments by company
/// 4. Write company files, or only plan them in a dry run
pub async fn run_process<C: Console + ?Sized>(
    config: Config,
    console: &mut C,
    cancellation_token: &CancellationToken,
) -> Result<RunStats> {
    let start_time = Instant::now();

    let input_path = resolve_input_path(&config, console)?;
    let row_separator = match config.processing.row_separator {
        Some(separator) => separator,
        None => prompt_row_separator(console)?,
    };
    debug!(
        "Using input {} with row separator {:?}",
        input_path.display(),
        row_separator
    );

    let parser = EnrollmentCsvParser::new(row_separator);
    let parsed = match config.processing.header_mismatch {
        HeaderMismatchPolicy::Continue => parser.parse_file(&input_path, &mut AssumeYes).await?,
        HeaderMismatchPolicy::Prompt => {
            let mut confirmation = PromptConfirmation::new(console);
            parser.parse_file(&input_path, &mut confirmation).await?
        }
    };
    let parse_stats = parsed.stats;

    let processed = RecordProcessor::new().process_enrollments(parsed.enrollments);
    debug!(
        "{} enrollments across {} company groups",
        processed.enrollment_count(),
        processed.groups.len()
    );

    let writer = JsonWriter::new(config.output_directory(&input_path));
    let files = if config.output.dry_run {
        info!("Dry run: no files will be written");
        writer.plan(&processed.groups)?
    } else {
        writer
            .write_groups(&processed.groups, cancellation_token)
            .await?
    };

    let output_sizes = files
        .iter()
        .map(|file| {
            let name = file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.company.clone());
            (name, file.bytes)
        })
        .collect();

    Ok(RunStats {
        input_path,
        output_dir: writer.output_dir().to_path_buf(),
        rows_read: parse_stats.total_rows,
        blank_rows_removed: parse_stats.blank_rows_removed,
        enrollments_parsed: parse_stats.enrollments_parsed,
        duplicates_removed: processed.stats.duplicates_removed,
        companies_written: files.len(),
        output_sizes,
        dry_run: config.output.dry_run,
        processing_time: start_time.elapsed(),
    })
}

fn resolve_input_path<C: Console + ?Sized>(config: &Config, console: &mut C) -> Result<PathBuf> {
    match &config.processing.input_path {
        Some(path) if path.is_file() => Ok(path.clone()),
        Some(path) => {
            warn!("Input file {} does not exist", path.display());
            prompt_input_path(console, |p| p.is_file())
        }
        None => prompt_input_path(console, |p| p.is_file()),
    }
}

/// Print a human-readable summary of a run to stdout
pub fn print_summary(stats: &RunStats) {
    let title = if stats.dry_run {
        "Dry Run Summary"
    } else {
        "Processing Summary"
    };
    println!("\n{}", title.bright_green().bold());
    println!("   • Input file: {}", stats.input_path.display());
    println!(
        "   • Rows read: {} ({} blank dropped)",
        stats.rows_read, stats.blank_rows_removed
    );
    println!(
        "   • Enrollments parsed: {}",
        stats.enrollments_parsed.to_string().bright_white().bold()
    );
    println!("   • Duplicates collapsed: {}", stats.duplicates_removed);
    println!(
        "   • Companies {}: {}",
        if stats.dry_run { "planned" } else { "written" },
        stats.companies_written.to_string().bright_white().bold()
    );
    println!(
        "   • Total output size: {}",
        RunStats::format_size(stats.total_output_size())
    );
    println!(
        "   • Processing time: {} ms",
        stats.processing_time.as_millis()
    );

    if !stats.output_sizes.is_empty() {
        println!("\n{} {}", "Output Files in".bright_green(), stats.output_dir.display());
        for (filename, size) in &stats.output_sizes {
            println!("   • {}: {}", filename, RunStats::format_size(*size));
        }
    }

    println!();
}
