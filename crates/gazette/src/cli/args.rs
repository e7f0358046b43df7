//! Clap argument definitions for the `gazette` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "gazette")]
#[command(about = "Gazette result viewer - inspect, highlight and copy search results")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `gazette show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// JSON file with search results (an array, or an object with a `matches` array)
    pub results: PathBuf,

    /// 1-based position of the result to show
    pub position: usize,

    /// Output the overlay markup instead of terminal text
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Output the rendered document as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gazette list`.
#[derive(Args, Debug, Clone)]
pub struct ListCommand {
    /// JSON file with search results
    pub results: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gazette highlight`.
#[derive(Args, Debug, Clone)]
pub struct HighlightCommand {
    /// Terms to highlight, matched literally and case-insensitively
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Read text from a file instead of stdin
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Output HTML with highlight spans
    #[arg(long)]
    pub html: bool,

    /// Highlight all terms in a single pass (no nested marks)
    #[arg(long)]
    pub union: bool,
}

/// Arguments for `gazette copy`.
#[derive(Args, Debug, Clone)]
pub struct CopyCommand {
    /// JSON file with search results
    pub results: PathBuf,

    /// 1-based position of the result to copy
    pub position: usize,

    /// Skip the system clipboard tools and write an OSC 52 sequence directly
    #[arg(long)]
    pub osc52: bool,
}

/// Arguments for `gazette init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.gazette.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `gazette` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show one result in the detail view
    Show(ShowCommand),

    /// List the results in a file
    List(ListCommand),

    /// Highlight terms in text
    Highlight(HighlightCommand),

    /// Copy a result's full text to the clipboard
    Copy(CopyCommand),

    /// Initialize gazette configuration in current directory
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,

    /// Show configuration files, view settings and form bindings
    Status,

    /// Show effective configuration settings
    Config,
}
