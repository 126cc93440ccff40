//! Error types for classifier construction, training and classification.

/// Result alias used by every fallible classifier operation.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Caller contract violations. Degenerate but valid inputs (no samples,
/// zero iterations) are never reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifierError {
    #[error("number_of_attributes must be greater than 0")]
    NoAttributes,

    #[error("class labels must be two distinct values")]
    DuplicateLabels,

    #[error("got {samples} samples but {labels} labels")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("sample {index} has {got} attributes, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("label at index {index} is not one of the two class labels")]
    UnknownLabel { index: usize },
}
