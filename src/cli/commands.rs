//! Command implementations for the equipment analyzer CLI
//!
//! This module wires the library together for each subcommand: logging and
//! configuration set-up, loading and saving the history file, and printing
//! results in human or JSON form.

use crate::app::adapters::history_file::{load_history, save_history};
use crate::app::models::{Analysis, DatasetRecord, NewDataset, NumericColumn, Summary};
use crate::app::services::analysis::analyze_path;
use crate::app::services::history_store::HistoryStore;
use crate::app::services::report_renderer::{PlainTextSink, ReportRenderer};
use crate::cli::args::{AnalyzeArgs, Args, Commands, DatasetArgs, OutputFormat, ReportArgs, UploadArgs};
use crate::config::Config;
use crate::constants::{LOG_TARGET, report_text};
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Validate arguments
/// 3. Dispatch to the subcommand
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args).context("Failed to load configuration")?;
    debug!("Loaded configuration: {:?}", config);

    let Some(command) = args.command.clone() else {
        return Ok(());
    };

    match command {
        Commands::Upload(upload) => run_upload(&config, args.output_format, &upload),
        Commands::Analyze(analyze) => run_analyze(args.output_format, &analyze),
        Commands::History => run_history(&config, args.output_format),
        Commands::Show(dataset) => run_show(&config, args.output_format, &dataset),
        Commands::Report(report) => run_report(&config, args.output_format, &report),
        Commands::Delete(dataset) => run_delete(&config, args.output_format, &dataset),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    // A subscriber may already be installed when running inside tests
    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (file -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = match &args.config_file {
        Some(_) => None,
        None => Config::default_config_path().ok(),
    };

    let config_file = args.config_file.as_deref().or_else(|| {
        default_config_path
            .as_deref()
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.history_file {
        config.history.file = Some(path.clone());
    }

    if let Some(capacity) = args.history_capacity {
        config.history.capacity = capacity;
    }
}

/// Load the history store for this invocation, returning it with its file
fn open_history(config: &Config) -> Result<(HistoryStore, PathBuf)> {
    let path = config
        .history_path()
        .context("Could not determine where to keep upload history; pass --history-file")?;
    debug!("History file: {}", path.display());

    let store = load_history(&path, config.history.capacity)
        .with_context(|| format!("Failed to open upload history at {}", path.display()))?;
    Ok((store, path))
}

fn store_history(path: &Path, store: &HistoryStore) -> Result<()> {
    save_history(path, store)
        .with_context(|| format!("Failed to save upload history to {}", path.display()))
}

fn run_upload(config: &Config, format: OutputFormat, upload: &UploadArgs) -> Result<()> {
    let analysis = analyze_path(&upload.file)
        .with_context(|| format!("Failed to analyze {}", upload.file.display()))?;
    let filename = upload
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| upload.file.display().to_string());

    let (store, path) = open_history(config)?;
    let id = store.insert(NewDataset::new(filename, analysis.summary.clone()));
    store_history(&path, &store)?;
    info!("Stored upload as dataset {}", id);

    match format {
        OutputFormat::Human => {
            println!("{} {}", "Stored dataset".green().bold(), id.to_string().bold());
            print_summary(&analysis.summary);
            if upload.show_rows {
                print_rows(&analysis)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "id": id,
                "summary": analysis.summary,
            });
            if upload.show_rows {
                value["data"] = serde_json::to_value(&analysis.rows)?;
            }
            print_json(&value)
        }
    }
}

fn run_analyze(format: OutputFormat, analyze: &AnalyzeArgs) -> Result<()> {
    let analysis = analyze_path(&analyze.file)
        .with_context(|| format!("Failed to analyze {}", analyze.file.display()))?;

    match format {
        OutputFormat::Human => {
            print_summary(&analysis.summary);
            if analyze.show_rows {
                print_rows(&analysis)?;
            }
            Ok(())
        }
        OutputFormat::Json if analyze.show_rows => print_json(&analysis),
        OutputFormat::Json => print_json(&serde_json::json!({ "summary": analysis.summary })),
    }
}

fn run_history(config: &Config, format: OutputFormat) -> Result<()> {
    let (store, _) = open_history(config)?;
    let records = store.list_recent(store.capacity());

    match format {
        OutputFormat::Human => {
            if records.is_empty() {
                println!("{}", "No uploads stored yet.".yellow());
                return Ok(());
            }

            println!(
                "{}",
                format!("{:>6}  {:<24}  {:>9}  {}", "ID", "UPLOADED AT", "EQUIPMENT", "FILENAME")
                    .bold()
            );
            for record in &records {
                println!(
                    "{:>6}  {:<24}  {:>9}  {}",
                    record.id,
                    record.uploaded_at.format(report_text::TIMESTAMP_FORMAT),
                    record.summary.total_equipment,
                    record.filename
                );
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&records),
    }
}

fn run_show(config: &Config, format: OutputFormat, dataset: &DatasetArgs) -> Result<()> {
    let (store, _) = open_history(config)?;
    let record = store.get(dataset.id)?;

    match format {
        OutputFormat::Human => {
            print_record_header(&record);
            print_summary(&record.summary);
            Ok(())
        }
        OutputFormat::Json => print_json(&record),
    }
}

fn run_report(config: &Config, format: OutputFormat, report_args: &ReportArgs) -> Result<()> {
    let (store, _) = open_history(config)?;
    let record = store.get(report_args.id)?;

    let mut layout = config.report;
    if let Some(lines) = report_args.lines_per_page {
        layout = layout.with_lines_per_page(lines);
        layout.validate()?;
    }

    let report = ReportRenderer::new(layout).render(&record);
    info!(
        "Rendered report for dataset {} on {} pages",
        record.id,
        report.page_count()
    );

    match (&report_args.output_file, format) {
        (Some(path), OutputFormat::Human) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create report file {}", path.display()))?;
            let mut sink = PlainTextSink::new(std::io::BufWriter::new(file));
            report
                .draw_to(&mut sink)
                .with_context(|| format!("Failed to write report file {}", path.display()))?;
            println!(
                "{} {} ({} pages)",
                "Report written to".green(),
                path.display(),
                report.page_count()
            );
            Ok(())
        }
        (Some(path), OutputFormat::Json) => {
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report file {}", path.display()))
        }
        (None, OutputFormat::Human) => {
            let stdout = std::io::stdout();
            let mut sink = PlainTextSink::new(stdout.lock());
            report.draw_to(&mut sink)?;
            Ok(())
        }
        (None, OutputFormat::Json) => print_json(&report),
    }
}

fn run_delete(config: &Config, format: OutputFormat, dataset: &DatasetArgs) -> Result<()> {
    let (store, path) = open_history(config)?;
    let removed = store.delete(dataset.id)?;
    store_history(&path, &store)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} ({})",
                "Deleted dataset".red().bold(),
                removed.id,
                removed.filename
            );
            Ok(())
        }
        OutputFormat::Json => print_json(&removed),
    }
}

fn print_record_header(record: &DatasetRecord) {
    println!("{} {}", "Dataset".bold(), record.id);
    println!("   • Filename: {}", record.filename);
    println!(
        "   • Uploaded at: {}",
        record.uploaded_at.format(report_text::TIMESTAMP_FORMAT)
    );
}

fn print_summary(summary: &Summary) {
    println!("\n{}", report_text::SUMMARY_HEADER.bold());
    println!("   • Total equipment: {}", summary.total_equipment);
    for column in NumericColumn::ALL {
        println!(
            "   • Average {}: {}",
            column.label().to_lowercase(),
            summary.display_average(column)
        );
    }

    println!("\n{}", report_text::DISTRIBUTION_HEADER.bold());
    for (label, count) in summary.type_distribution.entries() {
        println!("   • {}: {}", label.cyan(), count);
    }
}

fn print_rows(analysis: &Analysis) -> Result<()> {
    println!("\n{}", "Rows".bold());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &analysis.rows {
        let line = serde_json::to_string(row)?;
        writeln!(out, "   {}", line).context("Failed to write rows")?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_open_history_keeps_typed_source_under_context() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = Config::default().with_history_file(&path);

        let error = open_history(&config).unwrap_err();

        assert!(error.to_string().starts_with("Failed to open upload history at"));
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Json { .. })
        ));
    }

    #[test]
    fn test_open_then_store_history_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = Config::default().with_history_file(dir.path().join("h.json"));

        let (store, path) = open_history(&config).unwrap();
        assert!(store.is_empty());
        store_history(&path, &store).unwrap();

        let (reloaded, _) = open_history(&config).unwrap();
        assert!(reloaded.is_empty());
        assert!(path.exists());
    }
}
