//! Error types for docblocks library.

use std::io;
use thiserror::Error;

/// Result type alias for docblocks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, validating or exporting content.
///
/// The pure tree operations (`slug`, `traverse`, `extract_toc`) are total and
/// never produce one of these.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a well-formed content tree or page definition.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A page's content root is some other kind of block.
    #[error("Page content root must be a page block, found {0}")]
    RootNotPage(&'static str),

    /// A grid declares no columns.
    #[error("Grid block{} has {columns} columns (expected at least 1)", id_suffix(.id))]
    InvalidGrid {
        /// Explicit id of the offending grid, if any
        id: Option<String>,
        /// Declared column count
        columns: u32,
    },

    /// Heading level outside 1-6.
    #[error("Invalid heading level {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),

    /// No page is registered under the requested href.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Error while serializing a projection.
    #[error("Export error: {0}")]
    Export(String),
}

fn id_suffix(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" '{}'", id),
        None => String::new(),
    }
}
