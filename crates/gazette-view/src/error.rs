//! Error types for detail view rendering.

use thiserror::Error;

/// Errors that can occur while rendering a detail view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The HTML template failed to render.
    #[error("failed to render detail view: {0}")]
    Render(#[from] askama::Error),
}
