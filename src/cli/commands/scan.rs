//! Scan command: full analysis of a CSV file

use crate::adapters::csv;
use crate::config::AppConfig;
use crate::core::analysis::Analyzer;
use crate::domain::{LedgerScanError, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// CSV file to analyze
    pub input: PathBuf,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the redacted dataset as CSV to this file
    #[arg(long)]
    pub redacted_output: Option<PathBuf>,

    /// Detect and report without rewriting any cell
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON instead of the console format
    #[arg(long)]
    pub json: bool,
}

/// Execute the scan command
pub fn run(args: &ScanArgs, config: &AppConfig) -> Result<()> {
    let mut redaction = config.redaction.clone();
    if args.dry_run {
        redaction.dry_run = true;
    }

    let dataset = csv::load_path(&args.input)?;
    tracing::info!(
        input = %args.input.display(),
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "Loaded dataset"
    );

    let analyzer = Analyzer::new(redaction)?;
    let report = analyzer.analyze(dataset)?;

    if args.json {
        let json = report
            .format_json()
            .map_err(|e| LedgerScanError::Other(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", report.format_console());
    }

    if let Some(ref path) = args.output {
        report.write_to_file(path)?;
        tracing::info!(path = %path.display(), "Wrote JSON report");
    }

    if let Some(ref path) = args.redacted_output {
        csv::write_path(&report.redacted_data, path)?;
        tracing::info!(path = %path.display(), "Wrote redacted CSV");
    }

    Ok(())
}
