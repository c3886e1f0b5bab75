//! TSV load error types

use thiserror::Error;

/// Result type for TSV operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors that abort a grid load
///
/// Unlike cell-level runtime errors, a malformed grid shape is fatal to the
/// whole run: nothing is evaluated and the error surfaces to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input had no dimensions line at all
    #[error("dimensions line missing")]
    DimensionsLineMissing,

    /// The dimensions line had no row count
    #[error("row count not found on dimensions line")]
    RowsNotFound,

    /// The row count was not an integer in 1-9
    #[error("row count '{0}' is not an integer between 1 and 9")]
    RowsOutOfRange(String),

    /// The dimensions line had no column count
    #[error("column count not found on dimensions line")]
    ColsNotFound,

    /// The column count was not an integer in 1-26
    #[error("column count '{0}' is not an integer between 1 and 26")]
    ColsOutOfRange(String),

    /// Core error
    #[error("core error: {0}")]
    Core(#[from] tiny_sheets_core::Error),
}
