//! Configuration loading errors.

use thiserror::Error;

use crate::error::LocalizationError;

/// Config load error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Parsed values are out of range
    #[error("Invalid config: {0}")]
    Invalid(#[from] LocalizationError),
}
