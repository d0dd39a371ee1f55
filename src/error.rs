use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool loads workbooks and emits the JSON document.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as writing to standard output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Raised when a workbook does not have the sheet we read from.
    #[error("invalid workbook structure: {0}")]
    InvalidWorkbook(String),

    /// Raised by the strict header check when a catalog column is out of place.
    #[error("column {column} should be '{expected}' but the header says '{found}'")]
    ColumnMismatch {
        column: usize,
        expected: String,
        found: String,
    },

    /// Raised when a required spreadsheet does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
