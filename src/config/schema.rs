//! Configuration schema types

use crate::redaction::RedactionConfig;
use serde::{Deserialize, Serialize};

/// Root configuration structure, mapped from the TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Redaction engine settings
    #[serde(default)]
    pub redaction: RedactionConfig,
}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.redaction.validate()?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}
