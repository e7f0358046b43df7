//! Implementation of `gazette check`.

use std::process::ExitCode;

use gazette_config::discover_config_files;
use gazette_highlight::subheader;

use super::warnings::print_warnings;
use crate::cli::context::CommandContext;

/// Exit codes for `gazette check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Configuration is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Configuration has warnings but is usable.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Validates the configuration and reports issues.
///
/// Parse errors never reach this point: loading the context already fails on them.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'gazette init' to create a configuration file.");
        return exit_codes::OK;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return exit_codes::OK;
    }

    print_warnings(&warnings);
    exit_codes::WARNINGS
}
