//! Formula tokens
//!
//! Formulas arrive pre-lexed as a sequence of token strings such as
//! `["amount", "/", "(", "coefficient", "*", "amount", ")"]`. This module
//! defines the closed set of tokens those strings map to.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Placeholder kinds, each bound to its own substitution queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Filled from the `amounts` queue
    Amount,
    /// Filled from the `coefficients` queue
    Coefficient,
}

impl Slot {
    /// Canonical token string
    pub fn name(self) -> &'static str {
        match self {
            Slot::Amount => "amount",
            Slot::Coefficient => "coefficient",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precedence group of operators reduced together in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// `*` and `/`, reduced first
    Multiplicative,
    /// `+` and `-`
    Additive,
}

impl Tier {
    /// Tiers in reduction order
    pub const ORDER: [Tier; 2] = [Tier::Multiplicative, Tier::Additive];
}

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Operator symbol as written in a formula
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Precedence tier of this operator
    pub fn tier(self) -> Tier {
        match self {
            Operator::Multiply | Operator::Divide => Tier::Multiplicative,
            Operator::Add | Operator::Subtract => Tier::Additive,
        }
    }

    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Grouping brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    /// Bracket symbol as written in a formula
    pub fn symbol(self) -> &'static str {
        match self {
            Bracket::Open => "(",
            Bracket::Close => ")",
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A token of an authored formula
///
/// Authored formulas never contain literal numbers: every operand is a
/// placeholder filled at solve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Token {
    Slot(Slot),
    Operator(Operator),
    Bracket(Bracket),
}

impl Token {
    pub const AMOUNT: Token = Token::Slot(Slot::Amount);
    pub const COEFFICIENT: Token = Token::Slot(Slot::Coefficient);
    pub const OPEN: Token = Token::Bracket(Bracket::Open);
    pub const CLOSE: Token = Token::Bracket(Bracket::Close);
    pub const MUL: Token = Token::Operator(Operator::Multiply);
    pub const DIV: Token = Token::Operator(Operator::Divide);
    pub const ADD: Token = Token::Operator(Operator::Add);
    pub const SUB: Token = Token::Operator(Operator::Subtract);

    /// Parse a single token string
    ///
    /// # Examples
    /// ```
    /// use decicalc_core::{Operator, Slot, Token};
    ///
    /// assert_eq!(Token::parse("amount").unwrap(), Token::Slot(Slot::Amount));
    /// assert_eq!(Token::parse("coeff").unwrap(), Token::Slot(Slot::Coefficient));
    /// assert_eq!(Token::parse("/").unwrap(), Token::Operator(Operator::Divide));
    /// assert!(Token::parse("%").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::EmptyToken);
        }

        if let Some(op) = Operator::from_symbol(s) {
            return Ok(Token::Operator(op));
        }

        match s {
            "(" => return Ok(Token::OPEN),
            ")" => return Ok(Token::CLOSE),
            _ => {}
        }

        match s.to_ascii_lowercase().as_str() {
            "amount" => Ok(Token::AMOUNT),
            "coefficient" | "coeff" => Ok(Token::COEFFICIENT),
            _ => Err(Error::InvalidOperator(s.to_string())),
        }
    }

    /// The placeholder kind, if this token is one
    pub fn slot(&self) -> Option<Slot> {
        match self {
            Token::Slot(slot) => Some(*slot),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Slot(slot) => slot.fmt(f),
            Token::Operator(op) => op.fmt(f),
            Token::Bracket(bracket) => bracket.fmt(f),
        }
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

impl From<Slot> for Token {
    fn from(slot: Slot) -> Self {
        Token::Slot(slot)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl From<Bracket> for Token {
    fn from(bracket: Bracket) -> Self {
        Token::Bracket(bracket)
    }
}
