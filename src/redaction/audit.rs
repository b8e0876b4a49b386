//! Audit logger for redaction operations

use crate::redaction::models::{PiiDetection, RedactionReport};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one scan
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    detection_count: usize,
    dry_run: bool,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    column: String,
    row: usize,
    /// SHA-256 hash of the original value (never log plaintext PII)
    value_hash: String,
}

/// Append-only audit logger for redaction operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log the outcome of a scan-and-redact pass
    pub fn log_scan(&self, report: &RedactionReport, dry_run: bool) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            detection_count: report.total_detections,
            dry_run,
            detections: report
                .detections
                .iter()
                .map(|d| self.create_audit_detection(d))
                .collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_detection(&self, detection: &PiiDetection) -> AuditDetection {
        AuditDetection {
            category: detection.category.label().to_string(),
            column: detection.column.clone(),
            row: detection.row,
            value_hash: self.hash_pii_value(&detection.original_value),
        }
    }

    /// Hash a PII value using SHA-256
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Detections: {} | Dry-run: {}",
                entry.timestamp, entry.detection_count, entry.dry_run
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redaction::models::PiiCategory;
    use tempfile::tempdir;

    fn sample_report() -> RedactionReport {
        let mut report = RedactionReport::default();
        report.record(PiiDetection {
            category: PiiCategory::Email,
            column: "contact".to_string(),
            row: 3,
            original_value: "test@example.com".to_string(),
        });
        report
    }

    #[test]
    fn test_audit_logger_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit/redaction.log");

        let logger = AuditLogger::new(log_path, true, true).unwrap();
        assert!(logger.enabled);
    }

    #[test]
    fn test_hash_pii_value() {
        let dir = tempdir().unwrap();
        let logger = AuditLogger::new(dir.path().join("a.log"), true, true).unwrap();

        let hash1 = logger.hash_pii_value("test@example.com");
        let hash2 = logger.hash_pii_value("test@example.com");
        let hash3 = logger.hash_pii_value("different@example.com");

        assert_eq!(hash1, hash2);
        assert_ne!(hash1, hash3);
    }

    #[test]
    fn test_log_scan_never_writes_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger.log_scan(&sample_report(), false).unwrap();

        assert!(log_path.exists());
        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("contact"));
        assert!(!content.contains("test@example.com"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger.log_scan(&sample_report(), false).unwrap();
        assert!(!log_path.exists());
    }
}
