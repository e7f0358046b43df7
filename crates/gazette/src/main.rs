//! gazette: a viewer for official-gazette search results.
//!
//! The search server hands over its matches as JSON. `gazette` loads them into a results
//! buffer and drives the same detail overlay the web page uses, on a headless surface:
//! show one result with its matched terms highlighted, list the page, highlight
//! arbitrary text, or copy an article's raw text to the clipboard.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{args::Cli, commands, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    commands::run(cli.command).await
}
