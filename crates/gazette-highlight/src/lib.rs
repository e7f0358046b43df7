//! Term highlighting and terminal styling for gazette.
//!
//! The core of this crate is [`TermHighlighter`], which marks every case-insensitive literal
//! occurrence of the matched search terms in an article body. The result is a
//! [`Highlighted`] tree that can be rendered as escaped HTML, as raw markers, or for a
//! terminal. Terminal renderings strip control characters from article text, see
//! [`sanitize_terminal`].

#![warn(missing_docs)]

mod markup;
mod style;
mod syntax;
mod term;

pub use markup::{Highlighted, Span, escape_html};
pub use style::{
    REPLACEMENT, Tone, colors, dim, error, header, paint, rule, sanitize_terminal, subheader,
    success, warning,
};
pub use syntax::TomlHighlighter;
pub use term::{Strategy, TermHighlighter, highlight};
