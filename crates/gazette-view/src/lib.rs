//! Detail view assembly for gazette search results.
//!
//! [`DetailViewBuilder`] turns one [`SearchResult`](gazette_results::SearchResult) into a
//! [`RenderedDocument`]: a display title, a metadata block, the optional summary and
//! snippet blocks, and the article body with every matched term highlighted. The
//! document can then be rendered as escaped HTML for the modal overlay or as styled text
//! for a terminal.

#![warn(missing_docs)]

mod builder;
mod document;
mod error;

pub use builder::{DetailViewBuilder, group_thousands};
pub use document::{Metadata, RenderedDocument};
pub use error::ViewError;
