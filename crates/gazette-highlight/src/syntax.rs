//! Colouring of `.gazette.toml` documents for `gazette init` and `gazette config`.

use syntect::{
    easy::HighlightLines,
    highlighting::{Style, Theme},
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines,
    theme::{EmbeddedThemeName, extra},
};

use crate::style::colors;

/// Renders TOML with 24-bit terminal colours.
pub struct TomlHighlighter {
    /// Language definitions; holds the TOML grammar.
    syntaxes: SyntaxSet,
    /// Colour theme.
    theme: Theme,
    /// Prefix written before every line.
    indent: String,
}

impl Default for TomlHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlHighlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntaxes: extra_newlines(),
            theme: extra().get(EmbeddedThemeName::Dracula).clone(),
            indent: String::new(),
        }
    }

    /// Prefixes every rendered line with `width` spaces.
    pub fn indented(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// The TOML grammar, or plain text if the bundled set lacks it.
    fn grammar(&self) -> &SyntaxReference {
        self.syntaxes
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }

    /// Colours `document`, ending with a style reset.
    ///
    /// A line the grammar fails on is written uncoloured.
    pub fn render(&self, document: &str) -> String {
        let mut lines = HighlightLines::new(self.grammar(), &self.theme);
        let mut out = String::with_capacity(document.len() * 2);
        for line in LinesWithEndings::from(document) {
            out.push_str(&self.indent);
            match lines.highlight_line(line, &self.syntaxes) {
                Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => {
                    let fallback: [(Style, &str); 1] = [(Style::default(), line)];
                    out.push_str(&as_24_bit_terminal_escaped(&fallback, false));
                }
            }
        }
        out.push_str(colors::RESET);
        out
    }
}
