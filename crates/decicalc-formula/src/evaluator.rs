//! Precedence evaluator
//!
//! Reduces a bracket-free formula to one value in two left-to-right passes:
//! first every `*`/`/`, then every `+`/`-`. Each pass reads the previous
//! buffer and writes collapsed `number op number` triplets into a new one.

use crate::error::{FormulaError, FormulaResult};
use crate::stages::{FlatFormula, FlatToken};
use crate::value::combine;
use bigdecimal::BigDecimal;
use decicalc_core::{Operator, Tier};

/// Collapse every operator of `tier`, left to right
///
/// The result of a collapse becomes the left operand of the next operator,
/// which gives left associativity: `a / b / c` is `(a / b) / c`.
pub fn reduce_tier(formula: FlatFormula, tier: Tier, precision: u64) -> FormulaResult<FlatFormula> {
    let mut reduced: Vec<FlatToken> = Vec::with_capacity(formula.len());
    let mut tokens = formula.0.into_iter();

    while let Some(token) = tokens.next() {
        match token {
            FlatToken::Operator(op) if op.tier() == tier => {
                let lhs = reduced
                    .pop()
                    .and_then(FlatToken::into_number)
                    .ok_or_else(|| missing_operand(op, "left"))?;
                let rhs = tokens
                    .next()
                    .and_then(FlatToken::into_number)
                    .ok_or_else(|| missing_operand(op, "right"))?;
                reduced.push(FlatToken::Number(combine(&lhs, op, &rhs, precision)?));
            }
            other => reduced.push(other),
        }
    }

    Ok(FlatFormula(reduced))
}

fn missing_operand(op: Operator, side: &str) -> FormulaError {
    FormulaError::MalformedFormula(format!("operator '{}' has no number on its {}", op, side))
}

/// Reduce a bracket-free formula to its value
pub fn calculate(formula: FlatFormula, precision: u64) -> FormulaResult<BigDecimal> {
    if formula.is_empty() {
        return Err(FormulaError::MalformedFormula("empty formula".into()));
    }

    let mut current = formula;
    for tier in Tier::ORDER {
        current = reduce_tier(current, tier, precision)?;
        tracing::trace!(?tier, formula = %current, "reduced tier");
    }

    let mut tokens = current.0.into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.into_number().ok_or_else(|| {
            FormulaError::MalformedFormula("formula did not reduce to a number".into())
        }),
        (Some(_), Some(_)) => Err(FormulaError::MalformedFormula(
            "numbers without an operator between them".into(),
        )),
        _ => Err(FormulaError::MalformedFormula(
            "formula did not reduce to a number".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    /// Build a flat formula from `"1 + 2 * 3"`-style text
    fn flat(text: &str) -> FlatFormula {
        text.split_whitespace()
            .map(|t| match Operator::from_symbol(t) {
                Some(op) => FlatToken::Operator(op),
                None => FlatToken::Number(BigDecimal::from_str(t).unwrap()),
            })
            .collect()
    }

    fn eval(text: &str) -> FormulaResult<BigDecimal> {
        calculate(flat(text), 40)
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_single_number() {
        assert_eq!(eval("42.5").unwrap(), dec("42.5"));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 * 3 + 4").unwrap(), dec("10"));
        assert_eq!(eval("4 + 2 * 3").unwrap(), dec("10"));
        assert_eq!(eval("10 - 6 / 2").unwrap(), dec("7"));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("64 / 4 / 2").unwrap(), dec("8"));
        assert_eq!(eval("10 - 3 - 2").unwrap(), dec("5"));
        assert_eq!(eval("10 - 3 + 2").unwrap(), dec("9"));
        assert_eq!(eval("1000 / 5 * 3").unwrap(), dec("600"));
    }

    #[test]
    fn test_reduce_multiplicative_tier_only() {
        let reduced = reduce_tier(flat("1 + 2 * 3 - 8 / 4"), Tier::Multiplicative, 40).unwrap();
        assert_eq!(reduced, flat("1 + 6 - 2"));
    }

    #[test]
    fn test_exact_decimal_arithmetic() {
        assert_eq!(eval("0.1 + 0.2").unwrap(), dec("0.3"));
        assert_eq!(eval("1.005 * 1000").unwrap(), dec("1005"));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("5 / 0"), Err(FormulaError::DivisionByZero));
        assert_eq!(eval("5 / 0 + 1"), Err(FormulaError::DivisionByZero));
    }

    #[test]
    fn test_malformed() {
        for text in ["* 5", "5 +", "5 + * 3", "5 * / 3", "+", "5 5", "1 + 2 3"] {
            assert!(
                matches!(eval(text), Err(FormulaError::MalformedFormula(_))),
                "expected malformed: {text}"
            );
        }
        assert!(matches!(
            calculate(FlatFormula::default(), 40),
            Err(FormulaError::MalformedFormula(_))
        ));
    }

    #[test]
    fn test_precision_applies_to_every_step() {
        // 1/3 is rounded to 40 digits before it is multiplied back
        let expected = dec(&format!("0.{}", "9".repeat(40)));
        assert_eq!(eval("1 / 3 * 3").unwrap(), expected);

        assert_eq!(calculate(flat("2 / 3"), 5).unwrap(), dec("0.66667"));
    }
}
