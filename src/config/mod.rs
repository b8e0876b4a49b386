//! Configuration management
//!
//! TOML-backed configuration with `LEDGERSCAN_*` environment variable
//! overrides.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default};
pub use schema::{AppConfig, LoggingConfig};
