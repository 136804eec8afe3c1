use clap::Parser;
use equipment_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Equipment Analyzer - Chemical Equipment Dataset Summaries");
    println!("=========================================================");
    println!();
    println!("Validate equipment CSV files, compute averages and type distributions,");
    println!("keep the most recent uploads and render paginated reports.");
    println!();
    println!("USAGE:");
    println!("    equipment-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    upload      Analyze a CSV file and store its summary");
    println!("    analyze     Analyze a CSV file without storing it");
    println!("    history     List stored uploads, most recent first");
    println!("    show        Show the stored summary of one upload");
    println!("    report      Render the report of one stored upload");
    println!("    delete      Delete one stored upload");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Store a new upload and print its summary:");
    println!("    equipment-analyzer upload plant-a.csv");
    println!();
    println!("    # Render the report of dataset 3 into a file:");
    println!("    equipment-analyzer report 3 -o report_3.txt");
    println!();
    println!("    # Keep history in a custom location, JSON output:");
    println!("    equipment-analyzer --history-file ./history.json --output-format json history");
    println!();
    println!("For detailed help on any command, use:");
    println!("    equipment-analyzer <COMMAND> --help");
}
