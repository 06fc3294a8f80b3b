//! credit-score error types

/// Raw input could not be turned into a feature vector.
///
/// Recoverable: the caller should re-prompt for the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("credit mix must be one of Bad, Standard or Good")]
    CreditMixUnset,

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Monetary amounts must be finite and non-negative.
    #[error("{field} must be a non-negative amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}

/// Classifier output does not line up with the known class table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodingError {
    #[error("unknown class label: {0:?}")]
    UnknownLabel(String),

    #[error("probability vector has {actual} entries, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// credit-score error types
#[derive(Debug, thiserror::Error)]
pub enum CreditScoreError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("unexpected model output: {0}")]
    Decoding(#[from] DecodingError),

    /// Model artifact failed to load, or the classifier failed at inference.
    #[error("model error: {0}")]
    Model(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for credit-score operations
pub type Result<T> = std::result::Result<T, CreditScoreError>;
