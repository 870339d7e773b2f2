//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Line break tags: {}", config.extract.line_break_tags.join(", "));
                println!(
                    "  Thematic break tags: {}",
                    config.extract.thematic_break_tags.join(", ")
                );
                println!("  Max depth: {}", config.extract.max_depth);
                println!("  Hidden tags: {}", config.visibility.hidden_tags.join(", "));
                println!("  Default format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
