//! Extraction configuration

use crate::dom::Element;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default recursion ceiling for nested containers
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Which tags the walker treats specially, and how deep it may recurse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Tags that force a hard break and produce no block (e.g. `br`)
    pub line_break_tags: Vec<String>,

    /// Tags that break the flow and are preserved as their own block (e.g. `hr`)
    pub thematic_break_tags: Vec<String>,

    /// Maximum container nesting the walker descends into
    pub max_depth: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            line_break_tags: vec!["br".to_string()],
            thematic_break_tags: vec!["hr".to_string()],
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the constraints serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        let all_tags = self.line_break_tags.iter().chain(&self.thematic_break_tags);
        for tag in all_tags {
            if tag.trim().is_empty() {
                return Err(ConfigError::Invalid("tag names must not be empty".to_string()));
            }
        }

        if let Some(tag) = self
            .line_break_tags
            .iter()
            .find(|tag| contains_tag(&self.thematic_break_tags, tag))
        {
            return Err(ConfigError::Invalid(format!(
                "'{tag}' is listed as both a line break and a thematic break"
            )));
        }

        Ok(())
    }

    /// Whether `element` is a hard line break
    pub fn is_line_break(&self, element: &Element) -> bool {
        contains_tag(&self.line_break_tags, &element.tag)
    }

    /// Whether `element` is a thematic break
    pub fn is_thematic_break(&self, element: &Element) -> bool {
        contains_tag(&self.thematic_break_tags, &element.tag)
    }
}

fn contains_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag))
}
