//! # decicalc-core
//!
//! Core data structures for the decicalc formula engine.
//!
//! This crate provides the authored side of a formula:
//! - [`Token`] - Placeholders ([`Slot`]), [`Operator`]s and [`Bracket`]s
//! - [`Formula`] - An ordered token sequence, before values are substituted
//!
//! ## Example
//!
//! ```rust
//! use decicalc_core::{Formula, Token};
//!
//! let formula: Formula = "amount / ( coefficient * amount )".parse().unwrap();
//! assert_eq!(formula.amount_slots(), 2);
//! assert_eq!(formula.tokens()[1], Token::DIV);
//! ```

pub mod error;
pub mod formula;
pub mod token;

pub use error::{Error, Result};
pub use formula::Formula;
pub use token::{Bracket, Operator, Slot, Tier, Token};
