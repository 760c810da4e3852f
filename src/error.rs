//! Error types for the anofox-outliers library.

use thiserror::Error;

/// Result type alias for outlier detection operations.
pub type Result<T> = std::result::Result<T, OutlierError>;

/// Errors that can occur while validating detector input.
///
/// Every variant is raised before any statistic is computed; once a detector
/// has been constructed, the analysis itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlierError {
    /// Input series is empty.
    #[error("empty input data")]
    EmptyData,

    /// Rolling window is longer than the series.
    #[error("window size {window} exceeds series length {len}")]
    WindowTooLarge { window: usize, len: usize },

    /// A date string could not be parsed.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dates and values have different lengths.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Rendering a result to JSON failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for OutlierError {
    fn from(err: serde_json::Error) -> Self {
        OutlierError::Serialization(err.to_string())
    }
}
