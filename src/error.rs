//! Error types for iris-nn.

use thiserror::Error;

/// Result type for matrix and network operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// The numeric engine has exactly one failure mode: operands whose shapes do
/// not fit the operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("shape mismatch in {op}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
}

/// Errors raised while loading and preparing a data set.
#[derive(Error, Debug)]
pub enum DataError {
    /// Malformed line in the source file (1-based line number)
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("data set is empty")]
    Empty,

    #[error("test fraction {0} is outside [0, 1]")]
    InvalidSplit(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading a run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
