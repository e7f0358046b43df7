//! Terminal implementations of the clipboard seams.
//!
//! The primary path pipes text into the first system clipboard tool found on `PATH`. The
//! fallback writes an OSC 52 escape sequence, which most terminal emulators turn into a
//! clipboard write, including over SSH.

use std::{
    io::{self, Stdout, Write},
    path::PathBuf,
    process::Stdio,
};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use gazette_highlight::{error, success};
use gazette_ui::{ClipboardError, Notifier, PrimaryClipboard, ScratchBuffer};
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::debug;

/// Clipboard tools in order of preference, with the arguments that make them read stdin.
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("pbcopy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// A system clipboard tool located on `PATH`.
#[derive(Debug, Clone)]
struct Tool {
    /// Resolved executable path.
    path: PathBuf,
    /// Arguments passed before reading stdin.
    args: &'static [&'static str],
}

/// Writes to the clipboard through an external tool.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    /// The tool to run, if one was found.
    tool: Option<Tool>,
}

impl SystemClipboard {
    /// Locates the first available clipboard tool.
    pub fn detect() -> Self {
        let tool = TOOLS.iter().find_map(|&(name, args)| {
            which::which(name).ok().map(|path| Tool { path, args })
        });
        match &tool {
            Some(t) => debug!(tool = %t.path.display(), "found clipboard tool"),
            None => debug!("no clipboard tool found"),
        }
        Self { tool }
    }

    /// A clipboard that is never available, forcing the fallback path.
    pub fn disabled() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PrimaryClipboard for SystemClipboard {
    fn is_available(&self) -> bool {
        self.tool.is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let Some(tool) = &self.tool else {
            return Err(ClipboardError::Unavailable);
        };

        let mut child = Command::new(&tool.path)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Rejected(format!(
                "{} exited with {status}",
                tool.path.display()
            )))
        }
    }
}

/// Builds the OSC 52 sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// The fallback buffer: holds the text and emits it as an OSC 52 sequence on copy.
pub struct Osc52Buffer<W> {
    /// Where the sequence is written.
    out: W,
    /// Text waiting to be copied.
    pending: Option<String>,
    /// Whether the pending text is selected.
    selected: bool,
}

impl<W: Write> Osc52Buffer<W> {
    /// Creates a buffer writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: None,
            selected: false,
        }
    }

    /// Returns the writer.
    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Buffer<Stdout> {
    /// Creates a buffer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ScratchBuffer for Osc52Buffer<W> {
    fn insert(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.pending = Some(text.to_string());
        self.selected = false;
        Ok(())
    }

    fn select_all(&mut self) {
        self.selected = self.pending.is_some();
    }

    fn exec_copy(&mut self) -> Result<(), ClipboardError> {
        let Some(text) = self.pending.as_deref().filter(|_| self.selected) else {
            return Err(ClipboardError::Rejected("nothing selected".into()));
        };
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn remove(&mut self) {
        self.pending = None;
        self.selected = false;
    }
}

/// Prints clipboard messages to stderr, keeping stdout free for the OSC 52 sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", success(message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", error(message));
    }
}
