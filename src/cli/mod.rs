//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for LedgerScan using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// LedgerScan - PII redaction and anomaly scanner for financial records
#[derive(Parser, Debug)]
#[command(name = "ledgerscan")]
#[command(version, about, long_about = None)]
#[command(author = "LedgerScan Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "ledgerscan.toml", env = "LEDGERSCAN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LEDGERSCAN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a CSV file: redact PII, flag anomalies, summarize amounts
    Scan(commands::scan::ScanArgs),

    /// Redact PII and write the redacted CSV
    Redact(commands::redact::RedactArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
