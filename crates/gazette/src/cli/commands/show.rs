//! Implementation of `gazette show`.

use std::process::ExitCode;

use crate::cli::{
    args::ShowCommand,
    context::CommandContext,
    output::{overlay_markup, print_json},
};

/// Opens the detail view on one result and prints it.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let modal = match ctx.open_result(&cmd.results, cmd.position) {
        Ok(modal) => modal,
        Err(code) => return code,
    };

    if cmd.html {
        println!("{}", overlay_markup(modal.surface()));
        return ExitCode::SUCCESS;
    }

    let Some(document) = modal.document() else {
        eprintln!("error: result {} did not render", cmd.position);
        return ExitCode::FAILURE;
    };

    if cmd.json {
        return print_json(document);
    }

    print!("{}", document.to_terminal());
    ExitCode::SUCCESS
}
