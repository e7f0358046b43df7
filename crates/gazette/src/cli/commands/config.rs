//! Implementation of `gazette config`.

use std::process::ExitCode;

use gazette_highlight::TomlHighlighter;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    print!("{}", TomlHighlighter::new().render(&toml));
    ExitCode::SUCCESS
}
