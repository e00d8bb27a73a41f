//! Report error types.

use thiserror::Error;

/// Errors that can occur while rendering a report.
///
/// Computing a report never fails; only writing it out can.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Unknown output format name.
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    /// CSV writer failure.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying writer failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
