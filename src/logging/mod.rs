//! Logging and observability
//!
//! Structured logging with configurable levels, console output, and an
//! optional JSON file layer with rotation.
//!
//! # Example
//!
//! ```no_run
//! use ledgerscan::config::LoggingConfig;
//! use ledgerscan::logging::init_logging;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Scan started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
