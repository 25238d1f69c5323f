//! # decicalc-formula
//!
//! Exact decimal evaluator for placeholder formulas.
//!
//! A formula is a pre-lexed token sequence of placeholders (`amount`,
//! `coefficient`), the operators `* / + -` and brackets. Solving it:
//! - substitutes values from two ordered queues into the placeholders
//! - resolves brackets innermost-first with an explicit stack
//! - reduces `*`/`/` then `+`/`-`, each left to right
//!
//! All arithmetic is done on [`BigDecimal`] values rounded to a fixed number
//! of significant digits (40 by default).
//!
//! ## Example
//!
//! ```rust
//! use decicalc_formula::{solve, BigDecimal, Formula};
//!
//! let formula: Formula = "amount * coefficient + amount".parse().unwrap();
//! let amounts = [BigDecimal::from(100), BigDecimal::from(1)];
//! let coefficients = [BigDecimal::from(2)];
//!
//! assert_eq!(solve(&formula, &amounts, &coefficients).unwrap(), BigDecimal::from(201));
//! ```

pub mod brackets;
pub mod calculator;
pub mod error;
pub mod evaluator;
pub mod options;
pub mod stages;
pub mod substitution;
pub mod value;

pub use bigdecimal::BigDecimal;
pub use calculator::{solve, Calculator, Solution};
pub use decicalc_core::{Bracket, Formula, Operator, Slot, Tier, Token};
pub use error::{FormulaError, FormulaResult};
pub use options::{CalculatorOptions, DEFAULT_PRECISION};
pub use stages::{FlatFormula, FlatToken, NumberFormula, NumberToken};
pub use value::to_plain_string;
