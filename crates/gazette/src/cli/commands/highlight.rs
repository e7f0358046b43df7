//! Implementation of `gazette highlight`.

use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use gazette_config::Strategy;
use gazette_highlight::TermHighlighter;

use crate::cli::{args::HighlightCommand, context::CommandContext, output::with_trailing_newline};

/// Highlights terms in a file or stdin.
pub fn run(ctx: &CommandContext, cmd: &HighlightCommand) -> ExitCode {
    let text = match &cmd.file {
        Some(path) => fs::read_to_string(ctx.cwd.join(path)).map_err(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map(|_| buf)
                .map_err(|e| eprintln!("error: failed to read stdin: {e}"))
        }
    };
    let Ok(text) = text else {
        return ExitCode::FAILURE;
    };

    let strategy = if cmd.union {
        Strategy::Union
    } else {
        ctx.config.view.strategy
    };
    let highlighted = TermHighlighter::with_strategy(&cmd.terms, strategy).highlight(&text);

    let rendered = if cmd.html {
        highlighted.to_html(&ctx.config.view.highlight_class)
    } else {
        highlighted.to_ansi()
    };
    print!("{}", with_trailing_newline(rendered));
    ExitCode::SUCCESS
}
