//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use gazette_highlight::escape_html;
use gazette_ui::HeadlessSurface;
use serde::Serialize;

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders the overlay as the page would show it: title slot, then content slot.
pub fn overlay_markup(surface: &HeadlessSurface) -> String {
    format!(
        "<div id=\"resultModal\" class=\"modal\">\n<div class=\"modal-content\">\n<h2 id=\"modalTitle\">{}</h2>\n<div id=\"modalContent\">\n{}\n</div>\n</div>\n</div>",
        escape_html(&surface.title),
        surface.content.trim_end()
    )
}

/// Ensures `text` ends with exactly the newline it already has, or one added.
pub fn with_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
