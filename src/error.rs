//! Error types shared across the crate
//!
//! Every failure a caller can hit is a `MillError` variant; all of them are
//! recoverable by loading another file or adjusting the field selection.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MillError {
    /// The file content is not valid JSON. Carries the parser's own message.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The JSON parsed but the top-level value is not an array.
    #[error("expected a top-level JSON array, found {found}")]
    Shape { found: &'static str },

    /// Conversion was attempted before any file was loaded.
    #[error("no data loaded; load a JSON file first")]
    NoData,

    /// Conversion was attempted with zero fields selected.
    #[error("no fields selected; select at least one field")]
    EmptySelection,

    /// A selection flag named a field that does not exist in the field set.
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Sheet geometry exceeded what the xlsx format can address.
    #[error("export error: {message}")]
    Export { message: String },
}

pub type Result<T> = std::result::Result<T, MillError>;
