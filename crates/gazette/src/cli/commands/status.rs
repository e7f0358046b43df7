//! Implementation of `gazette status`.

use std::{path::Path, process::ExitCode};

use gazette_config::{Strategy, discover_config_files, is_global_config};
use gazette_highlight::{dim, subheader};

use super::warnings::print_warnings;
use crate::cli::context::CommandContext;

/// Shows configuration files, view settings, form bindings and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found, using defaults."));
        println!(
            "Run {} to create a configuration file.",
            subheader("gazette init")
        );
    } else {
        println!("{}", subheader("Config files:"));
        for path in &config_files {
            let scope = if is_global_config(path) {
                "global"
            } else {
                "local"
            };
            println!(
                "   {} {}",
                display_path(path, cwd),
                dim(&format!("({scope})"))
            );
        }
    }
    println!();

    let config = &ctx.config;
    let view = &config.view;
    println!("{}", subheader("View:"));
    println!("   locale             {}", view.locale);
    println!("   highlight_class    {}", view.highlight_class);
    let strategy = match view.strategy {
        Strategy::Sequential => "sequential",
        Strategy::Union => "union",
    };
    println!("   strategy           {strategy}");
    println!("   highlight_snippets {}", view.highlight_snippets);
    let max = if view.max_snippets == 0 {
        String::from("all")
    } else {
        view.max_snippets.to_string()
    };
    println!("   max_snippets       {max}");
    println!();

    println!("{}", subheader("Forms:"));
    if config.forms.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for binding in &config.forms {
        println!(
            "   {} {}",
            binding.name,
            dim(&format!(
                "({} -> {}, {})",
                binding.form, binding.button, binding.message
            ))
        );
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    print_warnings(&warnings);
    ExitCode::FAILURE
}

/// Shows `path` relative to `base` when it lies beneath it.
fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map_or_else(|_| path.display().to_string(), |p| p.display().to_string())
}
