//! Warning reporting shared by `gazette check` and `gazette status`.

use gazette_config::ConfigWarning;
use gazette_highlight::{dim, subheader, warning};

/// Prints the warning list followed by hints for resolving them.
pub fn print_warnings(warnings: &[ConfigWarning]) {
    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();
    print_hints(warnings);
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::EmptyHighlightClass => {
                "Set view.highlight_class, or remove it to use the default."
            }
            ConfigWarning::IncompleteForm { .. } => {
                "Fill in every field of the [forms.NAME] table, or remove it."
            }
            ConfigWarning::DuplicateFormId { .. } => {
                "Each form element can carry only one binding; rename or drop one."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("{}", subheader("Hints:"));
        for hint in hints {
            println!("   {}", dim(hint));
        }
    }
}
