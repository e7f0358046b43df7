//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules.

use std::{collections::HashMap, path::PathBuf};

use crate::{
    Config, FormBinding, Labels, ViewSettings,
    parse::{RawConfig, RawFormBinding, RawViewSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// CWD), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings and labels: first defined value wins (highest precedence)
/// - Labels not set anywhere come from the merged locale's preset
/// - Forms: merged by name, first definition wins completely. If no file defines any
///   form, the default bindings for the merged locale are used.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    if configs.is_empty() {
        return Config::default();
    }

    let view = merge_view_settings(configs);
    let labels = merge_labels(configs, &view);
    let forms = merge_forms(configs, &view, &labels);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Config {
        view,
        labels,
        forms,
        config_root,
    }
}

/// Merges view settings, taking first defined value for each field.
fn merge_view_settings(configs: &[ParsedConfig]) -> ViewSettings {
    let mut result = ViewSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref view) = parsed.config.view {
            apply_raw_view(&mut result, view);
        }
    }

    result
}

/// Applies raw view settings to result, overwriting any present values.
fn apply_raw_view(result: &mut ViewSettings, raw: &RawViewSettings) {
    if let Some(v) = raw.locale {
        result.locale = v;
    }
    if let Some(ref v) = raw.highlight_class {
        result.highlight_class.clone_from(v);
    }
    if let Some(v) = raw.strategy {
        result.strategy = v;
    }
    if let Some(v) = raw.highlight_snippets {
        result.highlight_snippets = v;
    }
    if let Some(v) = raw.max_snippets {
        result.max_snippets = v;
    }
}

/// Starts from the locale preset and applies label overrides.
fn merge_labels(configs: &[ParsedConfig], view: &ViewSettings) -> Labels {
    let mut result = Labels::for_locale(view.locale);

    for parsed in configs.iter().rev() {
        if let Some(ref labels) = parsed.config.labels {
            result.apply(labels);
        }
    }

    result
}

/// Merges form bindings by name. First definition wins completely.
fn merge_forms(configs: &[ParsedConfig], view: &ViewSettings, labels: &Labels) -> Vec<FormBinding> {
    let mut seen: HashMap<&str, FormBinding> = HashMap::new();
    let mut any_defined = false;

    // Iterate in precedence order (highest first) - first definition wins
    for parsed in configs {
        let Some(ref forms) = parsed.config.forms else {
            continue;
        };
        any_defined = true;

        for (name, raw) in forms {
            seen.entry(name.as_str())
                .or_insert_with(|| convert_form(name, raw, labels));
        }
    }

    if !any_defined {
        return FormBinding::defaults(view.locale);
    }

    // Return bindings in a deterministic order (by name)
    let mut forms: Vec<FormBinding> = seen.into_values().collect();
    forms.sort_by(|a, b| a.name.cmp(&b.name));
    forms
}

/// Converts a raw binding to the final type with defaults applied.
fn convert_form(name: &str, raw: &RawFormBinding, labels: &Labels) -> FormBinding {
    FormBinding {
        name: name.to_string(),
        form: raw.form.clone(),
        button: raw.button.clone(),
        message: raw.message.clone(),
        busy_label: raw.busy_label.clone().unwrap_or_default(),
        progress: raw
            .progress
            .clone()
            .unwrap_or_else(|| labels.progress.clone()),
    }
}
