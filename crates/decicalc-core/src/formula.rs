//! Authored formulas

use crate::error::Result;
use crate::token::{Slot, Token};
use std::fmt;
use std::str::FromStr;

/// An ordered token sequence as authored, before any values are substituted
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Formula(Vec<Token>);

impl Formula {
    /// Create a formula from tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// Parse a formula from individual token strings
    ///
    /// # Examples
    /// ```
    /// use decicalc_core::{Formula, Token};
    ///
    /// let formula = Formula::parse_tokens(["amount", "*", "coeff"]).unwrap();
    /// assert_eq!(formula.tokens(), &[Token::AMOUNT, Token::MUL, Token::COEFFICIENT]);
    /// ```
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|s| Token::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Tokens in authored order
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Number of `amount` placeholders
    pub fn amount_slots(&self) -> usize {
        self.count_slots(Slot::Amount)
    }

    /// Number of `coefficient` placeholders
    pub fn coefficient_slots(&self) -> usize {
        self.count_slots(Slot::Coefficient)
    }

    fn count_slots(&self, kind: Slot) -> usize {
        self.0.iter().filter(|t| t.slot() == Some(kind)).count()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Parses whitespace-separated token strings, e.g. `"amount / ( coeff * amount )"`
impl FromStr for Formula {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tokens(s.split_whitespace())
    }
}

impl From<Vec<Token>> for Formula {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for Formula {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Formula {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_whitespace_separated() {
        let formula: Formula = "amount / ( coeff * amount ) - coefficient".parse().unwrap();
        assert_eq!(
            formula.tokens(),
            &[
                Token::AMOUNT,
                Token::DIV,
                Token::OPEN,
                Token::COEFFICIENT,
                Token::MUL,
                Token::AMOUNT,
                Token::CLOSE,
                Token::SUB,
                Token::COEFFICIENT,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unseparated_text() {
        let err = "amount*coeff".parse::<Formula>().unwrap_err();
        assert_eq!(err, Error::InvalidOperator("amount*coeff".into()));
    }

    #[test]
    fn test_empty_formula() {
        let formula: Formula = "".parse().unwrap();
        assert!(formula.is_empty());
        assert_eq!(formula.to_string(), "");
    }

    #[test]
    fn test_slot_counts() {
        let formula: Formula = "amount / ( coeff * ( amount / coeff ) - coeff ) * coeff"
            .parse()
            .unwrap();
        assert_eq!(formula.amount_slots(), 2);
        assert_eq!(formula.coefficient_slots(), 4);
        assert_eq!(formula.len(), 15);
    }

    #[test]
    fn test_display_roundtrip() {
        let text = "amount / ( coefficient * amount ) * coefficient";
        let formula: Formula = text.parse().unwrap();
        assert_eq!(formula.to_string(), text);
        assert_eq!(formula.to_string().parse::<Formula>().unwrap(), formula);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_token_array() {
        let formula: Formula = serde_json::from_str(r#"["amount", "*", "coeff"]"#).unwrap();
        assert_eq!(
            formula.tokens(),
            &[Token::AMOUNT, Token::MUL, Token::COEFFICIENT]
        );
        assert_eq!(
            serde_json::to_string(&formula).unwrap(),
            r#"["amount","*","coefficient"]"#
        );
    }
}
