//! Error types for the market model

use thiserror::Error;

/// Model error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Index outside the bounds of a series
    #[error("Index out of range: index {index}, length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the series
        len: usize,
    },

    /// Parallel columns with different lengths
    #[error("Column length mismatch: {column} has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Offending column
        column: &'static str,
        /// Length of the reference column
        expected: usize,
        /// Length of the offending column
        actual: usize,
    },

    /// Candle routed to a dataframe of another pair
    #[error("Pair mismatch: expected {expected}, got {actual}")]
    PairMismatch {
        /// Pair of the dataframe
        expected: String,
        /// Pair of the candle
        actual: String,
    },

    /// Heikin Ashi conversion requested on a series that is already smoothed
    #[error("Series is already Heikin Ashi smoothed")]
    AlreadySmoothed,
}

/// Result alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
