//! Intermediate formula representations
//!
//! A formula moves through three shapes while it is solved:
//! authored [`Formula`](decicalc_core::Formula) → [`NumberFormula`] (placeholders
//! replaced by values) → [`FlatFormula`] (brackets resolved) → a single value.

use crate::value::to_plain_string;
use bigdecimal::BigDecimal;
use decicalc_core::{Bracket, Operator};
use std::fmt;

/// Token of a formula whose placeholders have been substituted
#[derive(Debug, Clone, PartialEq)]
pub enum NumberToken {
    Number(BigDecimal),
    Operator(Operator),
    Bracket(Bracket),
}

/// Token of a bracket-free formula
#[derive(Debug, Clone, PartialEq)]
pub enum FlatToken {
    Number(BigDecimal),
    Operator(Operator),
}

impl FlatToken {
    /// The number, if this token is one
    pub fn into_number(self) -> Option<BigDecimal> {
        match self {
            FlatToken::Number(n) => Some(n),
            FlatToken::Operator(_) => None,
        }
    }
}

impl From<FlatToken> for NumberToken {
    fn from(token: FlatToken) -> Self {
        match token {
            FlatToken::Number(n) => NumberToken::Number(n),
            FlatToken::Operator(op) => NumberToken::Operator(op),
        }
    }
}

impl fmt::Display for NumberToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberToken::Number(n) => f.write_str(&to_plain_string(n)),
            NumberToken::Operator(op) => op.fmt(f),
            NumberToken::Bracket(bracket) => bracket.fmt(f),
        }
    }
}

impl fmt::Display for FlatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatToken::Number(n) => f.write_str(&to_plain_string(n)),
            FlatToken::Operator(op) => op.fmt(f),
        }
    }
}

/// Formula with every placeholder replaced by a value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormula(pub Vec<NumberToken>);

/// Bracket-free formula
///
/// When well formed it alternates number, operator, number, … and starts
/// and ends with a number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatFormula(pub Vec<FlatToken>);

impl NumberFormula {
    pub fn tokens(&self) -> &[NumberToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FlatFormula {
    pub fn tokens(&self) -> &[FlatToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn write_spaced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, tokens: &[T]) -> fmt::Result {
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", token)?;
    }
    Ok(())
}

impl fmt::Display for NumberFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, &self.0)
    }
}

impl fmt::Display for FlatFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(f, &self.0)
    }
}

impl FromIterator<NumberToken> for NumberFormula {
    fn from_iter<I: IntoIterator<Item = NumberToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<FlatToken> for FlatFormula {
    fn from_iter<I: IntoIterator<Item = FlatToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
