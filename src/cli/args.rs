//! Command-line argument definitions for the equipment analyzer
//!
//! This module defines the CLI interface using the clap derive API. Each
//! subcommand corresponds to one operation of the upload/history/report
//! workflow.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the equipment analyzer
///
/// Summarizes chemical-process equipment CSV files, keeps the most recent
/// uploads and renders printable reports from them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "equipment-analyzer",
    version,
    about = "Summarize chemical equipment CSV data and render reports",
    long_about = "Validates equipment CSV uploads (equipment name, type, flowrate, pressure, \
                  temperature), computes column averages and the equipment type distribution, \
                  keeps a bounded history of recent uploads and renders paginated reports \
                  from stored summaries."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// History snapshot file
    ///
    /// Defaults to the configured path, or <data dir>/equipment-analyzer/history.json
    #[arg(long = "history-file", value_name = "FILE", global = true)]
    pub history_file: Option<PathBuf>,

    /// Path to configuration file (JSON format)
    ///
    /// If not specified, looks for <config dir>/equipment-analyzer/config.json
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Number of uploads to keep (overrides configuration)
    #[arg(long = "history-capacity", value_name = "COUNT", global = true)]
    pub history_capacity: Option<usize>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a CSV file and store its summary in the history
    Upload(UploadArgs),
    /// Analyze a CSV file without storing anything
    Analyze(AnalyzeArgs),
    /// List stored uploads, most recent first
    History,
    /// Show the stored summary of one upload
    Show(DatasetArgs),
    /// Render the report of one stored upload
    Report(ReportArgs),
    /// Delete one stored upload
    Delete(DatasetArgs),
}

/// Arguments for the upload command
#[derive(Debug, Clone, Parser)]
pub struct UploadArgs {
    /// CSV file with a header row
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Also print every coerced row
    #[arg(long = "rows")]
    pub show_rows: bool,
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// CSV file with a header row
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Also print every coerced row
    #[arg(long = "rows")]
    pub show_rows: bool,
}

/// Arguments for commands addressing one stored upload
#[derive(Debug, Clone, Parser)]
pub struct DatasetArgs {
    /// Dataset id as shown by `history`
    #[arg(value_name = "ID")]
    pub id: u64,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Dataset id as shown by `history`
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output-file", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Lines per page, overriding the configured line height
    #[arg(long = "lines-per-page", value_name = "COUNT")]
    pub lines_per_page: Option<usize>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if let Some(capacity) = self.history_capacity {
            if capacity == 0 {
                return Err(Error::configuration(
                    "History capacity must be greater than 0",
                ));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        match &self.command {
            Some(Commands::Upload(UploadArgs { file, .. }))
            | Some(Commands::Analyze(AnalyzeArgs { file, .. })) => {
                if !file.is_file() {
                    return Err(Error::configuration(format!(
                        "Input file does not exist: {}",
                        file.display()
                    )));
                }
            }
            Some(Commands::Report(report)) => {
                if report.lines_per_page == Some(0) {
                    return Err(Error::configuration(
                        "Lines per page must be greater than 0",
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }
}
