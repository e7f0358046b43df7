//! Highlighted text and its renderings.
//!
//! A [`Highlighted`] value keeps the original text split into plain runs and marked runs.
//! Marks can nest when a later term matches inside an earlier one. Keeping the structure
//! until render time is what lets the HTML rendering escape the text first and insert
//! markers second: marker syntax never passes through term matching.

use serde::Serialize;

use crate::style::{colors, push_sanitized};

/// A run of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// Unmarked text, exactly as it appeared in the source.
    Text(String),
    /// A highlighted region. Children are usually a single text run, but may contain
    /// nested marks.
    Mark(Vec<Span>),
}

impl Span {
    /// Appends the source text under this span to `out`.
    fn push_plain(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Mark(children) => children.iter().for_each(|c| c.push_plain(out)),
        }
    }

    /// Counts marks at or below this span.
    fn mark_count(&self) -> usize {
        match self {
            Self::Text(_) => 0,
            Self::Mark(children) => 1 + children.iter().map(Self::mark_count).sum::<usize>(),
        }
    }
}

/// Text with highlight marks applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Highlighted {
    /// Top-level runs in source order.
    spans: Vec<Span>,
}

/// How marks and text are written by [`write_spans`].
struct Markup<'a> {
    /// Written before a mark's children.
    open: &'a str,
    /// Written after a mark's children.
    close: &'a str,
    /// How text runs are written.
    text: TextMode,
    /// Re-open the enclosing mark after a nested mark closes. Needed when `close`
    /// resets all styling, as ANSI reset does.
    reopen: bool,
}

/// Treatment of text runs for one rendering surface.
#[derive(Clone, Copy)]
enum TextMode {
    /// Written as-is.
    Raw,
    /// HTML-escaped.
    Html,
    /// Control characters replaced, see [`crate::sanitize_terminal`].
    Terminal,
}

impl Highlighted {
    /// Wraps text with no marks.
    pub fn plain(text: &str) -> Self {
        Self::from_spans(vec![Span::Text(text.to_string())])
    }

    /// Builds from spans, dropping empty text runs.
    pub(crate) fn from_spans(spans: Vec<Span>) -> Self {
        let spans = spans
            .into_iter()
            .filter(|s| !matches!(s, Span::Text(t) if t.is_empty()))
            .collect();
        Self { spans }
    }

    /// Consumes the value, returning its top-level spans.
    pub(crate) fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Top-level spans in source order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Total number of marks, nested ones included.
    pub fn mark_count(&self) -> usize {
        self.spans.iter().map(Span::mark_count).sum()
    }

    /// Source text of each top-level mark, in order.
    pub fn marked_texts(&self) -> Vec<String> {
        self.spans
            .iter()
            .filter(|s| matches!(s, Span::Mark(_)))
            .map(|s| {
                let mut text = String::new();
                s.push_plain(&mut text);
                text
            })
            .collect()
    }

    /// The original text with all marks removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.spans.iter().for_each(|s| s.push_plain(&mut out));
        out
    }

    /// Renders with raw `open`/`close` markers around each mark and no escaping.
    ///
    /// Not safe for markup surfaces; use [`Self::to_html`] there.
    pub fn to_marked(&self, open: &str, close: &str) -> String {
        self.render(&Markup {
            open,
            close,
            text: TextMode::Raw,
            reopen: false,
        })
    }

    /// Renders as HTML: every text run is escaped, then marks become
    /// `<span class="{class}">` elements.
    pub fn to_html(&self, class: &str) -> String {
        let open = format!(r#"<span class="{}">"#, escape_html(class));
        self.render(&Markup {
            open: &open,
            close: "</span>",
            text: TextMode::Html,
            reopen: false,
        })
    }

    /// Renders for a terminal, styling marks with [`colors::MATCH`].
    ///
    /// Control characters in the text are replaced, so the only escape sequences in the
    /// output are the mark styles.
    pub fn to_ansi(&self) -> String {
        self.render(&Markup {
            open: colors::MATCH,
            close: colors::RESET,
            text: TextMode::Terminal,
            reopen: true,
        })
    }

    /// Runs [`write_spans`] into a fresh buffer.
    fn render(&self, markup: &Markup<'_>) -> String {
        let mut out = String::new();
        write_spans(&self.spans, markup, 0, &mut out);
        out
    }
}

/// Writes spans recursively according to `markup`.
fn write_spans(spans: &[Span], markup: &Markup<'_>, depth: usize, out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) => match markup.text {
                TextMode::Raw => out.push_str(text),
                TextMode::Html => push_escaped(out, text),
                TextMode::Terminal => push_sanitized(out, text),
            },
            Span::Mark(children) => {
                out.push_str(markup.open);
                write_spans(children, markup, depth + 1, out);
                out.push_str(markup.close);
                if markup.reopen && depth > 0 {
                    out.push_str(markup.open);
                }
            }
        }
    }
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Appends `text` to `out`, escaping HTML-special characters.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
