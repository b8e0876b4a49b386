//! Result type alias for LedgerScan

use super::errors::LedgerScanError;

/// Result type alias for LedgerScan operations
pub type Result<T> = std::result::Result<T, LedgerScanError>;
