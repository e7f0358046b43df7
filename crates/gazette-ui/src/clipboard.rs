//! Copying the displayed document to the system clipboard.
//!
//! A copy first tries the asynchronous primary clipboard. When that is unavailable or
//! fails, it falls back to the legacy path: put the text in a transient scratch buffer,
//! select it, run the copy action, and remove the buffer again.

use std::io;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a single copy path.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The path is not available on this platform.
    #[error("clipboard is not available")]
    Unavailable,
    /// The platform rejected the write.
    #[error("clipboard write failed: {0}")]
    Rejected(String),
    /// An I/O error while talking to the platform.
    #[error("clipboard i/o error: {0}")]
    Io(#[from] io::Error),
}

/// The asynchronous system clipboard.
#[async_trait]
pub trait PrimaryClipboard: Send + Sync {
    /// Returns false when the capability is missing entirely.
    fn is_available(&self) -> bool {
        true
    }

    /// Writes `text` to the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The transient buffer used by the legacy copy path.
pub trait ScratchBuffer {
    /// Creates the buffer holding `text`.
    fn insert(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Selects the buffer's full contents.
    fn select_all(&mut self);

    /// Runs the legacy copy action on the selection.
    fn exec_copy(&mut self) -> Result<(), ClipboardError>;

    /// Removes the buffer.
    fn remove(&mut self);
}

/// Surfaces user-visible confirmations and errors.
pub trait Notifier {
    /// Shows a confirmation.
    fn notify(&self, message: &str);

    /// Shows an error.
    fn error(&self, message: &str);
}

/// Which path completed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// The asynchronous system clipboard.
    Primary,
    /// The scratch-buffer fallback.
    Fallback,
}

/// Result of a copy request.
#[derive(Debug)]
pub enum CopyOutcome {
    /// Nothing to copy; no clipboard write and no message.
    Empty,
    /// The text was copied.
    Copied(CopyPath),
    /// Both paths failed.
    Failed {
        /// Why the primary path failed.
        primary: ClipboardError,
        /// Why the fallback path failed.
        fallback: ClipboardError,
    },
}

impl CopyOutcome {
    /// Returns true if the text reached the clipboard.
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied(_))
    }
}

/// Copies text through the primary clipboard, falling back to a scratch buffer.
pub struct ClipboardBridge<P, B, N> {
    /// Asynchronous system clipboard.
    primary: P,
    /// Legacy fallback buffer.
    scratch: B,
    /// Where confirmations and errors go.
    notifier: N,
    /// Confirmation message.
    copied: String,
    /// Failure message.
    copy_failed: String,
}

impl<P, B, N> ClipboardBridge<P, B, N>
where
    P: PrimaryClipboard,
    B: ScratchBuffer,
    N: Notifier,
{
    /// Creates a bridge. `copied` and `copy_failed` are the messages shown on success
    /// and on total failure.
    pub fn new(
        primary: P,
        scratch: B,
        notifier: N,
        copied: impl Into<String>,
        copy_failed: impl Into<String>,
    ) -> Self {
        Self {
            primary,
            scratch,
            notifier,
            copied: copied.into(),
            copy_failed: copy_failed.into(),
        }
    }

    /// Copies `text`. Empty text is a no-op.
    pub async fn copy(&mut self, text: &str) -> CopyOutcome {
        if text.is_empty() {
            debug!("nothing to copy");
            return CopyOutcome::Empty;
        }

        let primary = if self.primary.is_available() {
            self.primary.write_text(text).await
        } else {
            Err(ClipboardError::Unavailable)
        };

        let outcome = match primary {
            Ok(()) => CopyOutcome::Copied(CopyPath::Primary),
            Err(primary) => {
                warn!(error = %primary, "primary clipboard failed, using fallback");
                match self.fallback(text) {
                    Ok(()) => CopyOutcome::Copied(CopyPath::Fallback),
                    Err(fallback) => CopyOutcome::Failed { primary, fallback },
                }
            }
        };

        match &outcome {
            CopyOutcome::Copied(path) => {
                debug!(?path, chars = text.chars().count(), "copied to clipboard");
                self.notifier.notify(&self.copied);
            }
            CopyOutcome::Failed { fallback, .. } => {
                warn!(error = %fallback, "clipboard fallback failed");
                self.notifier.error(&self.copy_failed);
            }
            CopyOutcome::Empty => {}
        }
        outcome
    }

    /// Runs the scratch-buffer copy. The buffer is removed even if the copy fails.
    fn fallback(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.scratch.insert(text)?;
        self.scratch.select_all();
        let result = self.scratch.exec_copy();
        self.scratch.remove();
        result
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the scratch buffer.
    pub fn scratch(&self) -> &B {
        &self.scratch
    }
}


#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::{fakes::*, *};

    #[tokio::test]
    async fn test_empty_text_is_noop() {
        let mut bridge = bridge(FakePrimary::working(), FakeScratch::default());
        let outcome = bridge.copy("").await;

        assert!(matches!(outcome, CopyOutcome::Empty));
        assert_eq!(bridge.primary.calls.load(Ordering::SeqCst), 0);
        assert!(bridge.scratch().steps.is_empty());
        assert!(bridge.notifier().notes.lock().unwrap().is_empty());
        assert!(bridge.notifier().errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_primary_success() {
        let mut bridge = bridge(FakePrimary::working(), FakeScratch::default());
        let outcome = bridge.copy("O decreto 123").await;

        assert!(matches!(outcome, CopyOutcome::Copied(CopyPath::Primary)));
        assert_eq!(*bridge.primary.writes.lock().unwrap(), vec!["O decreto 123"]);
        assert!(bridge.scratch().steps.is_empty());
        assert_eq!(*bridge.notifier().notes.lock().unwrap(), vec!["Copied!"]);
    }

    #[tokio::test]
    async fn test_primary_failure_uses_fallback() {
        let mut bridge = bridge(FakePrimary::failing(), FakeScratch::default());
        let outcome = bridge.copy("texto").await;

        assert!(matches!(outcome, CopyOutcome::Copied(CopyPath::Fallback)));
        assert_eq!(
            bridge.scratch().steps,
            vec!["insert:texto", "select", "copy", "remove"]
        );
        assert!(!bridge.scratch().live);
        assert_eq!(*bridge.notifier().notes.lock().unwrap(), vec!["Copied!"]);
    }

    #[tokio::test]
    async fn test_unavailable_primary_is_not_called() {
        let mut bridge = bridge(FakePrimary::missing(), FakeScratch::default());
        let outcome = bridge.copy("texto").await;

        assert!(outcome.is_copied());
        assert_eq!(bridge.primary.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_both_paths_fail() {
        let scratch = FakeScratch {
            fail_copy: true,
            ..FakeScratch::default()
        };
        let mut bridge = bridge(FakePrimary::failing(), scratch);
        let outcome = bridge.copy("texto").await;

        assert!(matches!(
            outcome,
            CopyOutcome::Failed {
                primary: ClipboardError::Rejected(_),
                fallback: ClipboardError::Rejected(_),
            }
        ));
        assert!(!bridge.scratch().live);
        assert!(bridge.notifier().notes.lock().unwrap().is_empty());
        assert_eq!(*bridge.notifier().errors.lock().unwrap(), vec!["Copy failed."]);
    }
}
