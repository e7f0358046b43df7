//! Implementation of `gazette list`.

use std::process::ExitCode;

use gazette_highlight::{dim, header, sanitize_terminal};
use serde::Serialize;

use crate::cli::{args::ListCommand, context::CommandContext, output::print_json};

/// One row of `gazette list --json`.
#[derive(Serialize)]
struct ListEntry {
    /// 1-based position in the results file.
    position: usize,
    /// Title, falling back to filename and then the placeholder.
    title: String,
    /// Section label.
    section: String,
    /// Filename label.
    filename: String,
    /// Terms that matched this result.
    terms_matched: Vec<String>,
    /// Characters in the full text.
    char_count: usize,
}

/// Lists every result in a results file.
pub fn run(ctx: &CommandContext, cmd: &ListCommand) -> ExitCode {
    let buffer = match ctx.load_results(&cmd.results) {
        Ok(buffer) => buffer,
        Err(code) => return code,
    };
    let builder = ctx.builder();

    let entries: Vec<ListEntry> = buffer
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let doc = builder.build(result);
            ListEntry {
                position: i + 1,
                title: doc.title,
                section: doc.metadata.section,
                filename: doc.metadata.filename,
                terms_matched: result.terms_matched.clone(),
                char_count: doc.metadata.char_count,
            }
        })
        .collect();

    if cmd.json {
        return print_json(&entries);
    }

    if entries.is_empty() {
        println!("{}", dim("No results."));
        return ExitCode::SUCCESS;
    }

    let width = entries.len().to_string().len();
    for entry in &entries {
        println!(
            "{:>width$}  {}  {}  {}",
            entry.position,
            header(&entry.title),
            dim(&entry.section),
            sanitize_terminal(&entry.terms_matched.join(", "))
        );
    }
    ExitCode::SUCCESS
}
