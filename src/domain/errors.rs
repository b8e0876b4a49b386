//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types. The
//! scanning core itself degrades to partial or empty results instead of
//! erroring; these variants cover the surrounding layers (configuration,
//! input decoding, file IO).

use thiserror::Error;

/// Main LedgerScan error type
#[derive(Debug, Error)]
pub enum LedgerScanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input decode errors (malformed delimited text)
    #[error("Decode error: {0}")]
    Decode(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for LedgerScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerScanError {
    fn from(err: csv::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<anyhow::Error> for LedgerScanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerScanError::Configuration("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = LedgerScanError::Decode("bad row".to_string());
        assert_eq!(err.to_string(), "Decode error: bad row");
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LedgerScanError = io.into();
        assert!(matches!(err, LedgerScanError::Io(_)));
    }
}
