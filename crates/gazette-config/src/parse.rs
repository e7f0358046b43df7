//! Configuration file parsing.
//!
//! Parses individual `.gazette.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::HashMap, fs, path::Path};

use gazette_highlight::Strategy;
use serde::Deserialize;

use crate::{ConfigError, Locale};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// View settings section.
    pub view: Option<RawViewSettings>,
    /// Label overrides.
    pub labels: Option<RawLabels>,
    /// Busy-state form bindings: name -> binding.
    pub forms: Option<HashMap<String, RawFormBinding>>,
}

/// Raw view settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawViewSettings {
    /// Locale preset.
    pub locale: Option<Locale>,
    /// CSS class for highlight markers.
    pub highlight_class: Option<String>,
    /// Highlight strategy.
    pub strategy: Option<Strategy>,
    /// Whether to highlight snippets.
    pub highlight_snippets: Option<bool>,
    /// Maximum snippets shown (0 = all).
    pub max_snippets: Option<usize>,
}

/// Raw label overrides. Each present field replaces the locale preset's value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawLabels {
    /// Title used when a result has neither title nor filename.
    pub document_placeholder: Option<String>,
    /// Shown for a missing section or filename.
    pub not_available: Option<String>,
    /// Shown in place of an empty article body.
    pub content_unavailable: Option<String>,
    /// Metadata label for the document title.
    pub document: Option<String>,
    /// Metadata label for the section.
    pub section: Option<String>,
    /// Metadata label for the filename.
    pub file: Option<String>,
    /// Metadata label for the matched terms.
    pub terms: Option<String>,
    /// Metadata label for the size.
    pub size: Option<String>,
    /// Unit appended to the character count.
    pub characters: Option<String>,
    /// Heading of the AI summary block.
    pub summary_heading: Option<String>,
    /// Heading of the snippets block.
    pub snippets_heading: Option<String>,
    /// Heading of the full text block.
    pub content_heading: Option<String>,
    /// Confirmation after a successful copy.
    pub copied: Option<String>,
    /// Error after both copy paths failed.
    pub copy_failed: Option<String>,
    /// Default progress text for busy forms.
    pub progress: Option<String>,
}

/// Raw form binding from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFormBinding {
    /// Form element identifier.
    pub form: String,
    /// Submit button identifier.
    pub button: String,
    /// Progress message element identifier.
    pub message: String,
    /// Button label while busy. When absent the button keeps its label.
    pub busy_label: Option<String>,
    /// Progress text (defaults to the `progress` label).
    pub progress: Option<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
