// LedgerScan - PII Redaction and Anomaly Scanner for Financial Records
// Copyright (c) 2025 LedgerScan Contributors
// Licensed under the MIT License

//! # LedgerScan - PII Redaction and Anomaly Scanner
//!
//! LedgerScan scans tabular financial/accounting records for personally
//! identifiable information, redacts it in place, and flags statistically
//! anomalous transactions.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII (SSNs, phone numbers, emails, account numbers) with
//!   an ordered, first-match-wins pattern set
//! - **Redacting** matched cells in place with fixed placeholders or digit
//!   masking
//! - **Flagging** duplicate payments, IQR amount outliers, and negative
//!   amounts
//! - **Summarizing** the amount column (total, mean, median, min, max)
//!
//! ## Architecture
//!
//! LedgerScan follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (anomaly scanning, analysis composition)
//! - [`redaction`] - PII detection, redaction, and audit logging
//! - [`adapters`] - External formats (CSV decoding and export)
//! - [`domain`] - Tabular model, error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledgerscan::adapters::csv;
//! use ledgerscan::core::analysis::Analyzer;
//! use ledgerscan::redaction::RedactionConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = csv::load_path("ledger.csv")?;
//!
//!     let analyzer = Analyzer::new(RedactionConfig::default())?;
//!     let report = analyzer.analyze(dataset)?;
//!
//!     println!("Redacted {} PII cells", report.pii_count);
//!     println!("Flagged {} anomalies", report.anomalies.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible boundary operations return [`domain::Result`] with
//! [`domain::LedgerScanError`]. The scanning core itself never errors on
//! data it can't interpret: missing columns disable the dependent detectors
//! and unparseable cells drop out of numeric computations.
//!
//! ## Logging
//!
//! LedgerScan uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(column = "amount", "No numeric values found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod redaction;
