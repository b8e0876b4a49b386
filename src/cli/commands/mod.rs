//! Command implementations

pub mod redact;
pub mod scan;
pub mod validate;
