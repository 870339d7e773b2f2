//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use flowseg_core::ExtractConfig;
use flowseg_html::DEFAULT_HIDDEN_TAGS;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract sentences and standalone blocks from documents
    Process(process::ProcessArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the tags treated specially by default
    Tags,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => {
                let mut lines = vec!["Available output formats:".to_string()];
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                        lines.push(format!("  {:<10} - {help}", value.get_name()));
                    }
                }
                lines
            }
            ListCommands::Tags => {
                let config = ExtractConfig::default();
                vec![
                    "Default tag handling:".to_string(),
                    format!("  line breaks:     {}", config.line_break_tags.join(", ")),
                    format!("  thematic breaks: {}", config.thematic_break_tags.join(", ")),
                    format!("  hidden:          {}", DEFAULT_HIDDEN_TAGS.join(", ")),
                ]
            }
        }
    }
}
