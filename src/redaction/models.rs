//! PII detection data models

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// PII categories detected in financial records
///
/// Ordering matters: the variants are listed in detection precedence order
/// (a 9-digit SSN without separators would otherwise also satisfy the
/// account-number shape).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Social Security Numbers
    Ssn,
    /// Telephone numbers
    Phone,
    /// Email addresses
    Email,
    /// Account numbers (8+ consecutive digits)
    AccountNumber,
}

impl PiiCategory {
    /// Human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssn => "SSN",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::AccountNumber => "Account Number",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single redacted cell
///
/// The original value is carried only so the audit logger can hash it; it is
/// never serialized into reports.
#[derive(Debug, Clone)]
pub struct PiiDetection {
    /// Category of PII found in the cell
    pub category: PiiCategory,
    /// Column the cell belongs to
    pub column: String,
    /// Zero-based row index of the cell
    pub row: usize,
    /// Original cell text prior to redaction
    pub original_value: String,
}

/// Aggregated outcome of a scan-and-redact pass
///
/// Per column, the distinct set of categories seen anywhere in that column;
/// globally, the number of redacted cells (a cell counts once even if the
/// winning pattern occurs several times within it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Distinct PII categories per column, for columns with at least one hit
    pub columns: BTreeMap<String, BTreeSet<PiiCategory>>,
    /// Total number of cells containing PII across the dataset
    pub total_detections: usize,
    /// Per-cell detections, consumed by the audit logger
    #[serde(skip)]
    pub detections: Vec<PiiDetection>,
}

impl RedactionReport {
    /// Record one detected cell
    pub fn record(&mut self, detection: PiiDetection) {
        self.columns
            .entry(detection.column.clone())
            .or_default()
            .insert(detection.category);
        self.total_detections += 1;
        self.detections.push(detection);
    }

    /// Whether any PII was detected
    pub fn has_detections(&self) -> bool {
        self.total_detections > 0
    }
}
