// LedgerScan - PII Redaction and Anomaly Scanner for Financial Records
// Copyright (c) 2025 LedgerScan Contributors
// Licensed under the MIT License

use clap::Parser;
use ledgerscan::cli::{commands, Cli, Commands};
use ledgerscan::config;
use ledgerscan::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration (defaults when the default config file is absent)
    let app_config = match config::load_config_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            process::exit(2);
        }
    };

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &app_config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "LedgerScan - PII redaction and anomaly scanner"
    );

    let result = match cli.command {
        Commands::Scan(ref args) => commands::scan::run(args, &app_config),
        Commands::Redact(ref args) => commands::redact::run(args, &app_config),
        Commands::ValidateConfig(ref args) => commands::validate::run(args, &cli.config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
