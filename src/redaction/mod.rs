//! PII detection and redaction
//!
//! This module provides pattern-based PII classification and in-place
//! redaction for tabular financial records.
//!
//! # Architecture
//!
//! The redaction pipeline consists of:
//! - **Detection**: an ordered set of regex patterns (SSN, phone, email,
//!   account number) evaluated per cell with first-match-wins semantics
//! - **Redaction**: fixed placeholder substitution, or digit masking for
//!   account-number runs
//! - **Audit**: optional structured logging with hashed original values
//!
//! # Usage
//!
//! ```rust,ignore
//! use ledgerscan::redaction::{RedactionConfig, RedactionEngine};
//!
//! let engine = RedactionEngine::new(RedactionConfig::default())?;
//! let report = engine.scan_and_redact(&mut dataset)?;
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;

// Re-export main types
pub use config::RedactionConfig;
pub use engine::RedactionEngine;
pub use models::{PiiCategory, PiiDetection, RedactionReport};
