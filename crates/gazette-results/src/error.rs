//! Error types for loading search results.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a results buffer.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// Failed to read a results file.
    #[error("failed to read results file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The results payload is not valid JSON or does not match the record shape.
    #[error("failed to parse results: {source}")]
    ParseJson {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
