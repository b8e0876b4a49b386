//! Edge case tests for the redaction engine

use ledgerscan::domain::{CellValue, Dataset};
use ledgerscan::redaction::{
    config::{AuditConfig, RedactionConfig},
    engine::RedactionEngine,
    PiiCategory,
};
use tempfile::tempdir;

fn create_engine(config: RedactionConfig) -> RedactionEngine {
    RedactionEngine::new(config).expect("Failed to create engine")
}

#[test]
fn test_empty_dataset() {
    let mut ds = Dataset::new();
    let report = create_engine(RedactionConfig::default())
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    assert_eq!(report.total_detections, 0);
    assert!(!report.has_detections());
}

#[test]
fn test_very_long_cell_value() {
    let long_email = format!("{}@example.com", "a".repeat(990));
    let mut ds = Dataset::new();
    ds.push_column("contact", vec![CellValue::Text(long_email)]);

    let report = create_engine(RedactionConfig::default())
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    assert_eq!(report.total_detections, 1);
    assert_eq!(
        ds.column("contact").unwrap().cells[0],
        CellValue::from("REDACTED@EMAIL.COM")
    );
}

#[test]
fn test_special_characters_around_pii() {
    let mut ds = Dataset::new();
    ds.push_column(
        "notes",
        vec![
            CellValue::from("email <jane+billing@example.com> & \"quoted\""),
            CellValue::from("call (555) 123-4567 asap"),
        ],
    );

    let report = create_engine(RedactionConfig::default())
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    assert_eq!(report.total_detections, 2);
    let categories = report.columns.get("notes").unwrap();
    assert!(categories.contains(&PiiCategory::Email));
    assert!(categories.contains(&PiiCategory::Phone));
}

#[test]
fn test_seven_digits_is_not_an_account_number() {
    let mut ds = Dataset::new();
    ds.push_column("ref", vec![CellValue::from("1234567")]);

    let report = create_engine(RedactionConfig::default())
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    assert_eq!(report.total_detections, 1);
    // Seven digits still satisfy the phone shape (3 + 4), not account number
    assert!(report
        .columns
        .get("ref")
        .unwrap()
        .contains(&PiiCategory::Phone));
}

#[test]
fn test_digits_embedded_in_words_do_not_match() {
    let mut ds = Dataset::new();
    ds.push_column(
        "memo",
        vec![CellValue::from("order ab12345678cd shipped")],
    );

    let report = create_engine(RedactionConfig::default())
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    // No word boundary around the digit run
    assert_eq!(report.total_detections, 0);
    assert_eq!(
        ds.column("memo").unwrap().cells[0],
        CellValue::from("order ab12345678cd shipped")
    );
}

#[test]
fn test_audit_log_written_without_plaintext() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit/redaction.log");
    let config = RedactionConfig {
        audit: AuditConfig {
            enabled: true,
            log_path: log_path.clone(),
            json_format: true,
        },
        ..RedactionConfig::default()
    };

    let mut ds = Dataset::new();
    ds.push_column("ssn", vec![CellValue::from("123-45-6789")]);

    create_engine(config)
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    let content = std::fs::read_to_string(&log_path).expect("audit log missing");
    assert!(content.contains("SSN"));
    assert!(content.contains("\"row\":0"));
    assert!(!content.contains("123-45-6789"));
}

#[test]
fn test_dry_run_still_audits_detections() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("audit.log");
    let config = RedactionConfig {
        dry_run: true,
        audit: AuditConfig {
            enabled: true,
            log_path: log_path.clone(),
            json_format: true,
        },
        ..RedactionConfig::default()
    };

    let mut ds = Dataset::new();
    ds.push_column("contact", vec![CellValue::from("a@example.com")]);
    let original = ds.clone();

    create_engine(config)
        .scan_and_redact(&mut ds)
        .expect("scan failed");

    assert_eq!(ds, original);
    let content = std::fs::read_to_string(&log_path).expect("audit log missing");
    assert!(content.contains("\"dry_run\":true"));
}
