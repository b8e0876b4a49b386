//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AppConfig;
use crate::domain::errors::LedgerScanError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
///
/// Reads the file, parses it, applies `LEDGERSCAN_*` environment variable
/// overrides, and validates the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML does not parse, or
/// validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LedgerScanError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LedgerScanError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config: AppConfig = toml::from_str(&contents)
        .map_err(|e| LedgerScanError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    config
        .redaction
        .apply_env_overrides()
        .map_err(|e| LedgerScanError::Configuration(format!("{e:#}")))?;

    config.validate().map_err(|e| {
        LedgerScanError::Configuration(format!("Configuration validation failed: {e:#}"))
    })?;

    Ok(config)
}

/// Load configuration from the given path, or defaults when the file is absent
///
/// The default config path not existing is not an error: the tool runs with
/// built-in defaults. An explicitly provided path that is missing should be
/// surfaced with [`load_config`] instead.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        let mut config = AppConfig::default();
        config
            .redaction
            .apply_env_overrides()
            .map_err(|e| LedgerScanError::Configuration(format!("{e:#}")))?;
        Ok(config)
    }
}
