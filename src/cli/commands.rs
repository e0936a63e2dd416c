//! Command implementations for HealthKit processor CLI
//!
//! This module contains the command execution logic, logging setup, and the
//! post-run summary report.

use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

use crate::app::models::SeriesCollection;
use crate::app::services::export_reader::ExportReader;
use crate::app::services::record_converter::{ExportPipeline, PipelineStats};
use crate::app::services::series_writer::{self, SeriesWriter};
use crate::cli::args::{Args, Commands, ProcessArgs, SummaryArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner
///
/// Sets up logging, validates arguments, and dispatches to the selected
/// subcommand.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;

    debug!("Command line arguments: {:?}", args);
    args.validate()?;

    match args.command {
        Some(Commands::Process(process_args)) => run_process(&process_args),
        Some(Commands::Summary(summary_args)) => run_summary(&summary_args),
        None => Err(Error::configuration("No command specified")),
    }
}

/// Process an export file into a JSON series collection
fn run_process(args: &ProcessArgs) -> Result<()> {
    let start_time = Instant::now();

    let mut config = Config::new(args.input_path.clone(), args.output_path());
    config.pretty_output = args.pretty;
    config.show_progress = !args.no_progress && !args.quiet;
    config.validate()?;

    info!("Processing export file {}", config.input_path.display());

    let reader = ExportReader::open(&config.input_path)?;
    let mut collection = SeriesCollection::new(config.input_path.display().to_string());

    let pipeline = if config.show_progress {
        ExportPipeline::with_progress()
    } else {
        ExportPipeline::new()
    };
    let stats = pipeline.process_elements(reader, &mut collection)?;

    let writer = if config.pretty_output {
        SeriesWriter::pretty()
    } else {
        SeriesWriter::new()
    };
    let output_size = writer.write(&collection, &config.output_path)?;

    if !args.quiet {
        print_process_report(&collection, &stats, output_size, start_time.elapsed());
    }

    Ok(())
}

/// Summarize a previously written series collection
fn run_summary(args: &SummaryArgs) -> Result<()> {
    let collection = series_writer::read_collection(&args.input_path)?;
    print_series_table(&collection);
    Ok(())
}

/// Print the post-run report for the process command
fn print_process_report(
    collection: &SeriesCollection,
    stats: &PipelineStats,
    output_size: u64,
    elapsed: std::time::Duration,
) {
    println!();
    println!("{}", "Processing complete".green().bold());
    println!(
        "  {} records converted, {} elements skipped",
        stats.records_processed, stats.elements_skipped
    );
    println!(
        "  {} series, {} measurements, {} written",
        stats.series_created,
        collection.measurement_count(),
        format_size(output_size)
    );
    println!("  finished in {:.2?}", elapsed);

    print_series_table(collection);
}

/// Print one line per series: family/name, unit, measurement count
fn print_series_table(collection: &SeriesCollection) {
    println!();
    println!("{}", "Series".bold());
    for series in &collection.series {
        println!(
            "  {:<50} {:<45} {:>8}",
            format!("{}/{}", series.family, series.name).cyan(),
            series.unit,
            series.measurements.len()
        );
    }
}

/// Format a byte count in human-readable units
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
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

/// Initialize the tracing subscriber from CLI flags
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("healthkit_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}
