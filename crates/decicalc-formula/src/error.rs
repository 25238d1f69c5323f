//! Formula error types

use decicalc_core::Slot;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while solving a formula
///
/// Every stage stops at the first error; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// A placeholder was reached after its queue ran out
    #[error("Operand missing: no {slot} left for token {position}")]
    OperandMissing { slot: Slot, position: usize },

    /// `)` with no open bracket to close
    #[error("Unmatched closing bracket at token {position}")]
    UnmatchedCloseBracket { position: usize },

    /// Brackets still open at the end of the formula
    #[error("Unbalanced brackets: {depth} left open")]
    UnbalancedBrackets { depth: usize },

    /// Bracket contents could not be collected into a flat formula
    #[error("Malformed bracket contents: {0}")]
    MalformedBracketContents(String),

    /// An operator lacks a number on one or both sides
    #[error("Malformed formula: {0}")]
    MalformedFormula(String),

    /// Token text that is not a recognized operator
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),

    /// Right operand of `/` is exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Precision must be at least one significant digit
    #[error("Invalid precision: {0} significant digits")]
    InvalidPrecision(u64),
}

impl From<decicalc_core::Error> for FormulaError {
    fn from(err: decicalc_core::Error) -> Self {
        match err {
            decicalc_core::Error::InvalidOperator(text) => FormulaError::InvalidOperator(text),
            decicalc_core::Error::EmptyToken => FormulaError::InvalidOperator(String::new()),
        }
    }
}
