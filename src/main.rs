use clap::Parser;
use healthkit_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("HealthKit Processor - Apple Health Export Converter");
    println!("===================================================");
    println!();
    println!("Convert an Apple Health export.xml file into a JSON collection of");
    println!("canonical, unit-normalized time series.");
    println!();
    println!("USAGE:");
    println!("    healthkit-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Convert export.xml to a JSON series collection (main command)");
    println!("    summary     Summarize a previously written series collection");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Process an export:");
    println!("    healthkit-processor process --input export.xml --output series.json");
    println!();
    println!("    # Pretty-printed output without a progress spinner:");
    println!("    healthkit-processor process -i export.xml --pretty --no-progress");
    println!();
    println!("    # Summarize an existing output file:");
    println!("    healthkit-processor summary -i series.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    healthkit-processor <COMMAND> --help");
}
