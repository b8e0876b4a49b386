//! Redact command: rewrite PII and export the redacted CSV

use crate::adapters::csv;
use crate::config::AppConfig;
use crate::domain::Result;
use crate::redaction::RedactionEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// CSV file to redact
    pub input: PathBuf,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the redact command
pub fn run(args: &RedactArgs, config: &AppConfig) -> Result<()> {
    let engine = RedactionEngine::new(config.redaction.clone())?;

    let mut dataset = csv::load_path(&args.input)?;
    let report = engine.scan_and_redact(&mut dataset)?;

    match args.output {
        Some(ref path) => {
            csv::write_path(&dataset, path)?;
            tracing::info!(
                path = %path.display(),
                cells = report.total_detections,
                "Wrote redacted CSV"
            );
        }
        None => {
            let mut buffer = Vec::new();
            csv::write_writer(&dataset, &mut buffer)?;
            print!("{}", String::from_utf8_lossy(&buffer));
        }
    }

    Ok(())
}
