//! Configuration system for gazette.
//!
//! gazette reads TOML files named `.gazette.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.gazette.toml`
//! files found, then loading `~/.gazette.toml` as the global config with lowest precedence.
//!
//! Three things are configurable: how the detail view renders (`[view]`), every
//! user-visible string (`[labels]`, defaulting to a per-locale preset), and the busy-state
//! bindings attached to long-running forms (`[forms.<name>]`).

#![warn(missing_docs)]

mod discovery;
mod error;
mod labels;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use gazette_highlight::Strategy;
pub use labels::{Labels, Locale};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawFormBinding, RawLabels, RawViewSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for gazette.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.gazette.toml` files according to precedence rules.
#[derive(Debug, Clone)]
pub struct Config {
    /// Detail view rendering settings.
    pub view: ViewSettings,
    /// User-visible strings, resolved from the locale preset plus overrides.
    pub labels: Labels,
    /// Busy-state form bindings, sorted by name.
    pub forms: Vec<FormBinding>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let view = ViewSettings::default();
        let labels = Labels::for_locale(view.locale);
        let forms = FormBinding::defaults(view.locale);
        Self {
            view,
            labels,
            forms,
            config_root: None,
        }
    }
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.gazette.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An empty highlight class
    /// - Form bindings with empty element identifiers or texts
    /// - Two bindings attached to the same form
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the binding attached to a form element, if any.
    pub fn form_binding(&self, form_id: &str) -> Option<&FormBinding> {
        self.forms.iter().find(|b| b.form == form_id)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.gazette.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableConfig {
            view: &self.view,
            labels: &self.labels,
            forms: self
                .forms
                .iter()
                .map(|b| (b.name.as_str(), SerializableForm::from(b)))
                .collect(),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::SerializeToml)
    }
}

/// Detail view rendering settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Locale preset for labels and number formatting.
    pub locale: Locale,
    /// CSS class placed on highlight markers.
    pub highlight_class: String,
    /// How matched terms are combined when highlighting.
    pub strategy: Strategy,
    /// Whether snippets are highlighted like the full text.
    pub highlight_snippets: bool,
    /// Maximum snippets shown per result (0 = all).
    pub max_snippets: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            highlight_class: String::from("highlight"),
            strategy: Strategy::Sequential,
            highlight_snippets: false,
            max_snippets: 0,
        }
    }
}

/// A busy-state binding: when `form` is submitted, `button` is disabled and relabelled and
/// `message` shows a progress note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    /// Binding name (the `[forms.<name>]` key).
    pub name: String,
    /// Identifier of the form element.
    pub form: String,
    /// Identifier of the submit button.
    pub button: String,
    /// Identifier of the progress message element.
    pub message: String,
    /// Button label while busy.
    pub busy_label: String,
    /// Progress text shown in the message element.
    pub progress: String,
}

impl FormBinding {
    /// The bindings used when no configuration file defines any.
    pub fn defaults(locale: Locale) -> Vec<Self> {
        let labels = Labels::for_locale(locale);
        let (refresh, search, mestrando, suggestions, send_all, sequential) = match locale {
            Locale::En => (
                "🔄 Refreshing cache...",
                "🔎 Searching...",
                "🔍 Searching master's listings...",
                "🔎 Searching all suggestions...",
                "▶️ Sending tests...",
                "Sequential search in progress. The full search can take up to 1 minute.",
            ),
            Locale::PtBr => (
                "🔄 Atualizando cache...",
                "🔎 Buscando...",
                "🔍 Buscando Mestrando...",
                "🔎 Buscando todas as sugestões...",
                "▶️ Enviando testes...",
                "Busca sequencial em andamento. A busca completa pode demorar até 1 minuto.",
            ),
        };

        let binding = |name: &str, prefix: &str, msg: &str, busy: &str, progress: &str| Self {
            name: name.to_string(),
            form: format!("{prefix}Form"),
            button: format!("{prefix}Btn"),
            message: msg.to_string(),
            busy_label: busy.to_string(),
            progress: progress.to_string(),
        };

        vec![
            binding(
                "mestrando",
                "searchMestrando",
                "mestrandoProcessing",
                mestrando,
                sequential,
            ),
            binding(
                "refresh",
                "refreshCache",
                "refreshProcessing",
                refresh,
                &labels.progress,
            ),
            binding("search", "search", "searchProcessing", search, &labels.progress),
            binding("send_all", "sendAllNow", "sendAllProcessing", send_all, &labels.progress),
            binding(
                "suggestions",
                "searchSuggestions",
                "suggestionsProcessing",
                suggestions,
                &labels.progress,
            ),
        ]
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// View settings.
    view: &'a ViewSettings,
    /// Resolved labels.
    labels: &'a Labels,
    /// Form bindings keyed by name (sorted for deterministic output).
    forms: BTreeMap<&'a str, SerializableForm<'a>>,
}

/// A form binding without its name, which becomes the table key.
#[derive(Serialize)]
struct SerializableForm<'a> {
    /// Form element identifier.
    form: &'a str,
    /// Button element identifier.
    button: &'a str,
    /// Message element identifier.
    message: &'a str,
    /// Busy button label.
    busy_label: &'a str,
    /// Progress text.
    progress: &'a str,
}

impl<'a> From<&'a FormBinding> for SerializableForm<'a> {
    fn from(binding: &'a FormBinding) -> Self {
        Self {
            form: &binding.form,
            button: &binding.button,
            message: &binding.message,
            busy_label: &binding.busy_label,
            progress: &binding.progress,
        }
    }
}
