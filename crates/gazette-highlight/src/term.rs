//! Case-insensitive literal term highlighting.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::markup::{Highlighted, Span};

/// How multiple terms are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One pass per term, in the order given. Each pass also scans text already inside
    /// earlier marks, so a later term that matches inside an earlier match produces a
    /// nested mark.
    #[default]
    Sequential,
    /// A single pass over the union of all terms. Marks never overlap; where several
    /// terms match at the same position the longest wins.
    Union,
}

/// Highlights every case-insensitive occurrence of a set of terms.
///
/// Terms match literally: characters such as `.`, `*`, `+` or `(` match themselves.
#[derive(Debug, Clone)]
pub struct TermHighlighter {
    /// Compiled patterns, applied in order.
    patterns: Vec<Regex>,
}

impl TermHighlighter {
    /// Creates a sequential highlighter for `terms`.
    pub fn new<S: AsRef<str>>(terms: &[S]) -> Self {
        Self::with_strategy(terms, Strategy::Sequential)
    }

    /// Creates a highlighter for `terms` using the given strategy.
    ///
    /// Empty terms are ignored. A term whose pattern cannot be compiled (only possible for
    /// extremely long terms) is skipped with a warning.
    pub fn with_strategy<S: AsRef<str>>(terms: &[S], strategy: Strategy) -> Self {
        let literals: Vec<&str> = terms
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !t.is_empty())
            .collect();

        let patterns: Vec<Regex> = match strategy {
            Strategy::Sequential => literals.into_iter().filter_map(|t| compile(&[t])).collect(),
            Strategy::Union => {
                let mut by_length = literals;
                by_length.sort_by(|a, b| b.len().cmp(&a.len()));
                by_length.dedup();
                compile(&by_length).into_iter().collect()
            }
        };
        debug!(?strategy, patterns = patterns.len(), "compiled term highlighter");

        Self { patterns }
    }

    /// Returns true if no term will ever match.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Applies the highlighter to `text`.
    pub fn highlight(&self, text: &str) -> Highlighted {
        let mut spans = Highlighted::plain(text).into_spans();
        for pattern in &self.patterns {
            spans = mark_matches(spans, pattern);
        }
        Highlighted::from_spans(spans)
    }
}

/// Highlights `terms` in `text` with the sequential strategy.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S]) -> Highlighted {
    TermHighlighter::new(terms).highlight(text)
}

/// Compiles a case-insensitive alternation of escaped literals.
fn compile(literals: &[&str]) -> Option<Regex> {
    if literals.is_empty() {
        return None;
    }
    let pattern = literals
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(terms = ?literals, error = %e, "skipping highlight term");
            None
        }
    }
}

/// Splits every text run in `spans` (marked or not) around matches of `pattern`.
fn mark_matches(spans: Vec<Span>, pattern: &Regex) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            Span::Text(text) => split_text(&text, pattern, &mut out),
            Span::Mark(children) => out.push(Span::Mark(mark_matches(children, pattern))),
        }
    }
    out
}

/// Pushes the runs of `text` onto `out`, wrapping each match in a mark.
fn split_text(text: &str, pattern: &Regex, out: &mut Vec<Span>) {
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            out.push(Span::Text(text[last..m.start()].to_string()));
        }
        out.push(Span::Mark(vec![Span::Text(m.as_str().to_string())]));
        last = m.end();
    }
    if last < text.len() {
        out.push(Span::Text(text[last..].to_string()));
    }
}
