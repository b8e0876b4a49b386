//! Scan-and-redact engine
//!
//! The engine walks every cell of a dataset, classifies it against the
//! ordered pattern set, and rewrites matching cells in place. Classification
//! is first-match-wins: a cell belongs to at most one category, and once a
//! pattern has matched, later patterns are never consulted for that cell.
//!
//! # Ownership
//!
//! [`scan_and_redact`](RedactionEngine::scan_and_redact) mutates the dataset
//! it is given. Callers that need the original afterwards must pass a copy
//! they own; [`scan`](RedactionEngine::scan) is the pure variant that clones
//! internally and returns the redacted copy.
//!
//! # Examples
//!
//! ```
//! use ledgerscan::domain::{CellValue, Dataset};
//! use ledgerscan::redaction::{config::RedactionConfig, engine::RedactionEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(RedactionConfig::default())?;
//!
//! let mut dataset = Dataset::new();
//! dataset.push_column("contact", vec![CellValue::from("john@example.com")]);
//!
//! let report = engine.scan_and_redact(&mut dataset)?;
//! assert_eq!(report.total_detections, 1);
//! # Ok(())
//! # }
//! ```

use crate::domain::{CellValue, Dataset};
use crate::redaction::{
    audit::AuditLogger,
    config::RedactionConfig,
    detector::PatternSet,
    models::{PiiDetection, RedactionReport},
};
use anyhow::{Context, Result};

/// PII scan-and-redact engine
pub struct RedactionEngine {
    config: RedactionConfig,
    patterns: PatternSet,
    audit_logger: Option<AuditLogger>,
}

impl RedactionEngine {
    /// Create a new engine from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, a built-in
    /// pattern does not compile, or the audit logger cannot be set up.
    pub fn new(config: RedactionConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid redaction configuration")?;

        let patterns = PatternSet::builtin()?;

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            patterns,
            audit_logger,
        })
    }

    /// Scan every cell, redact matches in place, and report what was found
    ///
    /// Null cells are never PII and are left untouched. In dry-run mode the
    /// report is produced but no cell is rewritten.
    pub fn scan_and_redact(&self, dataset: &mut Dataset) -> Result<RedactionReport> {
        let mut report = RedactionReport::default();

        for column in dataset.columns_mut() {
            let column_name = column.name.clone();
            for (row, cell) in column.cells.iter_mut().enumerate() {
                if cell.is_null() {
                    continue;
                }

                let text = cell.to_string();
                let Some(pattern) = self.patterns.classify(&text) else {
                    continue;
                };

                report.record(PiiDetection {
                    category: pattern.category,
                    column: column_name.clone(),
                    row,
                    original_value: text.clone(),
                });

                if !self.config.dry_run {
                    *cell = CellValue::Text(pattern.redact(&text));
                }
            }
        }

        if let Some(ref logger) = self.audit_logger {
            logger.log_scan(&report, self.config.dry_run)?;
        }

        tracing::debug!(
            detections = report.total_detections,
            columns = report.columns.len(),
            dry_run = self.config.dry_run,
            "Redaction scan completed"
        );

        Ok(report)
    }

    /// Pure variant: returns a redacted copy, leaving the input untouched
    pub fn scan(&self, dataset: &Dataset) -> Result<(Dataset, RedactionReport)> {
        let mut copy = dataset.clone();
        let report = self.scan_and_redact(&mut copy)?;
        Ok((copy, report))
    }

    /// Whether redaction is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Whether the engine is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
