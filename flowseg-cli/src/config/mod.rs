//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use flowseg_core::ExtractConfig;
use flowseg_html::{StyleVisibility, DEFAULT_HIDDEN_TAGS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extract: ExtractConfig,

    /// Visibility configuration
    #[serde(default)]
    pub visibility: VisibilityConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Visibility-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Tags that are never rendered
    pub hidden_tags: Vec<String>,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            hidden_tags: DEFAULT_HIDDEN_TAGS.iter().map(|tag| tag.to_string()).collect(),
        }
    }
}

impl VisibilityConfig {
    /// Build the visibility predicate
    pub fn predicate(&self) -> StyleVisibility {
        StyleVisibility::with_hidden_tags(&self.hidden_tags)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl OutputConfig {
    /// Parse `default_format` into an output format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{}'", self.default_format))
                .into()
        })
    }
}

impl CliConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&source)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Check every section
    pub fn validate(&self) -> Result<()> {
        self.extract
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if self.visibility.hidden_tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(
                CliError::ConfigError("hidden tag names must not be empty".to_string()).into(),
            );
        }
        self.output.format()?;
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
