//! Terminal styling for result text.
//!
//! Article fields come from untrusted publications, so anything written to a terminal is
//! first passed through [`sanitize_terminal`]: a stray `ESC ] 52` in an article body must
//! not reach the clipboard, and `ESC [ 2J` must not clear the screen.

/// ANSI SGR sequences used by the viewer.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red text.
    pub const RED: &str = "\x1b[31m";
    /// Faint text.
    pub const DIM: &str = "\x1b[2m";
    /// Bold black on yellow, the terminal counterpart of the highlight class.
    pub const MATCH: &str = "\x1b[1;30;43m";
    /// Clears all styling.
    pub const RESET: &str = "\x1b[0m";
}

/// Shown in place of a control character.
pub const REPLACEMENT: char = '\u{FFFD}';

/// The role a piece of terminal text plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Overlay title.
    Title,
    /// Field labels and block headings.
    Label,
    /// Secondary values and placeholders.
    Muted,
    /// Clipboard confirmations.
    Success,
    /// Configuration warnings.
    Warning,
    /// Failures.
    Error,
    /// A matched term.
    Match,
}

impl Tone {
    /// SGR prefix for the tone.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Title => "\x1b[1m\x1b[36m",
            Self::Label => colors::BOLD,
            Self::Muted => colors::DIM,
            Self::Success => colors::GREEN,
            Self::Warning => colors::YELLOW,
            Self::Error => colors::RED,
            Self::Match => colors::MATCH,
        }
    }
}

/// Sanitizes `text` and wraps it in the tone's styling.
pub fn paint(tone: Tone, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 12);
    out.push_str(tone.prefix());
    push_sanitized(&mut out, text);
    out.push_str(colors::RESET);
    out
}

/// Replaces control characters other than newline and tab with [`REPLACEMENT`].
///
/// Covers C0, DEL and C1, which includes the ESC that starts every terminal sequence
/// and the single-byte CSI/OSC introducers.
pub fn sanitize_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_sanitized(&mut out, text);
    out
}

/// Appends the sanitized form of `text` to `out`.
pub(crate) fn push_sanitized(out: &mut String, text: &str) {
    out.extend(text.chars().map(|c| match c {
        '\n' | '\t' => c,
        c if c.is_control() => REPLACEMENT,
        c => c,
    }));
}

/// Overlay title styling.
pub fn header(text: &str) -> String {
    paint(Tone::Title, text)
}

/// Label styling.
pub fn subheader(text: &str) -> String {
    paint(Tone::Label, text)
}

/// Muted styling.
pub fn dim(text: &str) -> String {
    paint(Tone::Muted, text)
}

/// Confirmation styling.
pub fn success(text: &str) -> String {
    paint(Tone::Success, text)
}

/// Warning styling.
pub fn warning(text: &str) -> String {
    paint(Tone::Warning, text)
}

/// Error styling.
pub fn error(text: &str) -> String {
    paint(Tone::Error, text)
}

/// A muted horizontal rule `width` cells wide.
pub fn rule(width: usize) -> String {
    paint(Tone::Muted, &"─".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_in_tone_and_reset() {
        let h = header("Decreto 123");
        assert!(h.starts_with(Tone::Title.prefix()));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("Decreto 123"));
        assert!(success("ok").starts_with(colors::GREEN));
        assert!(warning("hm").starts_with(colors::YELLOW));
        assert!(error("no").starts_with(colors::RED));
    }

    #[test]
    fn test_sanitize_replaces_escape_sequences() {
        let hostile = "body \x1b[2J\x1b]52;c;ZXZpbA==\x07 end\u{9b}31m";
        let clean = sanitize_terminal(hostile);
        assert!(!clean.contains('\x1b'));
        assert!(!clean.contains('\x07'));
        assert!(!clean.contains('\u{9b}'));
        assert_eq!(clean.matches(REPLACEMENT).count(), 4);
        assert!(clean.starts_with("body "));
    }

    #[test]
    fn test_sanitize_keeps_layout_and_unicode() {
        assert_eq!(sanitize_terminal("Seção 1\n\tArt. 2º\r"), "Seção 1\n\tArt. 2º\u{FFFD}");
    }

    #[test]
    fn test_painted_text_carries_only_our_escapes() {
        let painted = subheader("\x1b]52;c;eA==\x07Título");
        assert_eq!(painted.matches('\x1b').count(), 2);
        assert!(painted.contains("\u{FFFD}]52;c;eA==\u{FFFD}Título"));
    }

    #[test]
    fn test_rule_width() {
        let r = rule(3);
        assert!(r.contains("───"));
        assert!(!r.contains("────"));
    }
}
