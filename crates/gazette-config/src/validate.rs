//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{collections::HashMap, fmt};

use crate::{Config, FormBinding};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The highlight class is empty, so markers carry no styling hook.
    EmptyHighlightClass,
    /// A form binding has an empty identifier or text.
    IncompleteForm {
        /// Name of the binding.
        name: String,
        /// Field that is empty.
        field: &'static str,
    },
    /// Two bindings are attached to the same form element.
    DuplicateFormId {
        /// Form element identifier.
        form: String,
        /// Binding defined first (by name order).
        first: String,
        /// Binding that collides with it.
        second: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHighlightClass => {
                write!(f, "view.highlight_class is empty")
            }
            Self::IncompleteForm { name, field } => {
                write!(f, "form '{name}' has an empty {field}")
            }
            Self::DuplicateFormId {
                form,
                first,
                second,
            } => {
                write!(
                    f,
                    "forms '{first}' and '{second}' are both attached to element '{form}'"
                )
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.view.highlight_class.trim().is_empty() {
        warnings.push(ConfigWarning::EmptyHighlightClass);
    }

    let mut owners: HashMap<&str, &str> = HashMap::new();
    for binding in &config.forms {
        warnings.extend(validate_form(binding));

        if let Some(first) = owners.get(binding.form.as_str()) {
            warnings.push(ConfigWarning::DuplicateFormId {
                form: binding.form.clone(),
                first: (*first).to_string(),
                second: binding.name.clone(),
            });
        } else {
            owners.insert(&binding.form, &binding.name);
        }
    }

    warnings
}

/// Checks that every identifier and text of a binding is non-empty.
///
/// An empty `busy_label` is allowed: it means the button keeps its label.
fn validate_form(binding: &FormBinding) -> Vec<ConfigWarning> {
    [
        ("form", &binding.form),
        ("button", &binding.button),
        ("message", &binding.message),
        ("progress", &binding.progress),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| ConfigWarning::IncompleteForm {
        name: binding.name.clone(),
        field,
    })
    .collect()
}
