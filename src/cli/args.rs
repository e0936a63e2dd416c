//! Command-line argument definitions for HealthKit processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the HealthKit export processor
///
/// Converts an Apple Health XML export into a canonical collection of
/// unit-normalized time series written as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "healthkit-processor",
    version,
    about = "Convert Apple Health XML exports into canonical unit-normalized time series",
    long_about = "Processes the export.xml file of an Apple Health data export into a JSON \
                  collection of named, unit-tagged time series. Every known HealthKit record \
                  type is rescaled into a canonical fixed-point integer unit; any record \
                  outside the known vocabulary aborts the run rather than being silently \
                  dropped or misclassified."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the HealthKit processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process an export.xml file into a JSON series collection (main command)
    Process(ProcessArgs),
    /// Summarize a previously written series collection
    Summary(SummaryArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the Apple Health export.xml file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to the Apple Health export.xml file"
    )]
    pub input_path: PathBuf,

    /// Output path for the JSON series collection
    ///
    /// Defaults to ./series.json. Created or overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the JSON series collection"
    )]
    pub output_path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,

    /// Disable the progress spinner
    #[arg(long = "no-progress", help = "Disable the progress spinner")]
    pub no_progress: bool,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", help = "Suppress all non-error output")]
    pub quiet: bool,
}

/// Arguments for the summary command
#[derive(Debug, Clone, Parser)]
pub struct SummaryArgs {
    /// Path to a series-collection JSON file written by `process`
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Path to a series-collection JSON file"
    )]
    pub input_path: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose", help = "Enable verbose logging")]
    pub verbose: bool,
}

impl Args {
    /// Validate argument combinations before running
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Process(process)) => process.validate(),
            Some(Commands::Summary(_)) | None => Ok(()),
        }
    }

    /// Log level selected by the flags of the active subcommand
    pub fn log_level(&self) -> &'static str {
        match &self.command {
            Some(Commands::Process(p)) if p.quiet => "error",
            Some(Commands::Process(p)) if p.verbose => "debug",
            Some(Commands::Summary(s)) if s.verbose => "debug",
            _ => "info",
        }
    }
}

impl ProcessArgs {
    /// Reject contradictory flag combinations
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(Error::configuration(
                "Cannot use --verbose and --quiet together",
            ));
        }
        Ok(())
    }

    /// Output path, defaulting to ./series.json
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("series.json"))
    }
}
