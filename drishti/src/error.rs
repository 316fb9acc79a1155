//! Error types for Drishti.

use thiserror::Error;

use crate::core::GridShape;

/// Result type alias
pub type Result<T> = std::result::Result<T, LocalizationError>;

/// Errors raised by the histogram filter.
///
/// All variants are detected before any work is done and returned to the
/// caller unchanged. The filter never falls back to a uniform belief on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocalizationError {
    /// Malformed grid shape or an out-of-range parameter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Color grid and belief grid disagree in size.
    #[error("Dimension mismatch: grid is {grid}, beliefs are {beliefs}")]
    DimensionMismatch {
        /// Shape of the color grid
        grid: GridShape,
        /// Shape of the belief grid
        beliefs: GridShape,
    },

    /// Normalization would divide by zero or a non-finite total.
    #[error("Degenerate distribution: total mass is {sum}")]
    DegenerateDistribution {
        /// Unnormalized total that could not be normalized
        sum: f64,
    },
}

impl LocalizationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        LocalizationError::InvalidInput(msg.into())
    }
}
