//! Validate-config command

use crate::config;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

/// Execute the validate-config command
pub fn run(_args: &ValidateArgs, config_path: &str) -> Result<()> {
    config::load_config(config_path)?;
    println!("✓ Configuration is valid: {config_path}");
    Ok(())
}
