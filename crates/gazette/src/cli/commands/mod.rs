//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod copy;
pub mod highlight;
pub mod init;
pub mod list;
pub mod show;
pub mod status;
mod warnings;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Builds the command context and dispatches to the selected subcommand.
pub async fn run(command: Commands) -> ExitCode {
    let ctx = match &command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    match command {
        Commands::Show(cmd) => show::run(&ctx, &cmd),
        Commands::List(cmd) => list::run(&ctx, &cmd),
        Commands::Highlight(cmd) => highlight::run(&ctx, &cmd),
        Commands::Copy(cmd) => copy::run(&ctx, &cmd).await,
        Commands::Init(cmd) => init::run(&ctx, &cmd),
        Commands::Check => check::run(&ctx),
        Commands::Status => status::run(&ctx),
        Commands::Config => config::run(&ctx),
    }
}
