//! Error types for decicalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading formula tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Token is neither a placeholder, an operator nor a bracket
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),

    /// Blank token
    #[error("Empty token")]
    EmptyToken,
}
