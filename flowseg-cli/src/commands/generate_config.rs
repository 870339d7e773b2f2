//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Configuration template with every default spelled out
const TEMPLATE: &str = r#"# flowseg configuration

[extract]
# Elements that end the current line of prose
line_break_tags = ["br"]

# Elements kept as standalone blocks at their position in the flow
thematic_break_tags = ["hr"]

# Deepest container nesting before extraction fails
max_depth = 512

[visibility]
# Elements that are never rendered; their subtrees are skipped.
# Elements with a `hidden` attribute, `aria-hidden="true"` or an inline
# `display: none` / `visibility: hidden` style are skipped as well.
hidden_tags = ["head", "script", "style", "template", "noscript", "title", "meta", "link"]

[output]
# One of: text, json, markdown
default_format = "text"

# Indent JSON output
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let Some(output) = &self.output else {
            print!("{}", Self::generate_template());
            return Ok(());
        };

        println!("Generating configuration template...");
        println!("  Output file: {}", output.display());

        std::fs::write(output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust break tags and hidden tags");
        println!("2. Validate your configuration:");
        println!("   flowseg validate --config {}", output.display());
        println!("3. Use it for processing:");
        println!("   flowseg process -i page.html --config {}", output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> &'static str {
        TEMPLATE
    }
}
