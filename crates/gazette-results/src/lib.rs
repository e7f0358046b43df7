//! Search result records for gazette.
//!
//! A search over official-gazette publications happens elsewhere; this crate holds what it
//! hands over: one [`SearchResult`] per matching [`Article`], collected in a read-only
//! [`ResultsBuffer`] for the page currently being displayed.

#![warn(missing_docs)]

mod buffer;
mod error;
mod record;

pub use buffer::ResultsBuffer;
pub use error::ResultsError;
pub use record::{Article, SearchResult};
