//! Domain models and types for LedgerScan
//!
//! The domain layer provides:
//! - **Tabular model** ([`Dataset`], [`Column`], [`CellValue`]) with the
//!   single numeric-coercion rule shared by all numeric computations
//! - **Error types** ([`LedgerScanError`])
//! - **Result type alias** ([`Result`])

pub mod dataset;
pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use dataset::{CellValue, Column, Dataset};
pub use errors::LedgerScanError;
pub use result::Result;
