//! External format adapters
//!
//! - [`csv`] - Delimited-text decoding into [`crate::domain::Dataset`] and
//!   redacted-dataset export

pub mod csv;
