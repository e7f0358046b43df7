//! Implementation of `gazette copy`.

use std::process::ExitCode;

use gazette_ui::{ClipboardBridge, CopyOutcome};
use tracing::info;

use crate::cli::{
    args::CopyCommand,
    clipboard::{Osc52Buffer, SystemClipboard, TerminalNotifier},
    context::CommandContext,
};

/// Copies a result's full text to the clipboard.
pub async fn run(ctx: &CommandContext, cmd: &CopyCommand) -> ExitCode {
    let modal = match ctx.open_result(&cmd.results, cmd.position) {
        Ok(modal) => modal,
        Err(code) => return code,
    };

    let primary = if cmd.osc52 {
        SystemClipboard::disabled()
    } else {
        SystemClipboard::detect()
    };
    let labels = &ctx.config.labels;
    let mut bridge = ClipboardBridge::new(
        primary,
        Osc52Buffer::stdout(),
        TerminalNotifier,
        labels.copied.as_str(),
        labels.copy_failed.as_str(),
    );

    match modal.copy_to_clipboard(&mut bridge).await {
        CopyOutcome::Copied(path) => {
            info!(?path, position = cmd.position, "result copied");
            ExitCode::SUCCESS
        }
        CopyOutcome::Empty => {
            eprintln!("warning: result {} has no text to copy", cmd.position);
            ExitCode::SUCCESS
        }
        CopyOutcome::Failed { .. } => ExitCode::FAILURE,
    }
}
