//! Formula calculator
//!
//! Composes the three stages: substitution → bracket resolution → precedence
//! evaluation. Each stage is also callable on its own.

use crate::brackets;
use crate::error::FormulaResult;
use crate::evaluator;
use crate::options::CalculatorOptions;
use crate::stages::{FlatFormula, NumberFormula};
use crate::substitution;
use bigdecimal::BigDecimal;
use decicalc_core::Formula;

/// Result of [`Calculator::solve_traced`]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Formula after placeholder substitution
    pub substituted: NumberFormula,
    /// Formula after bracket resolution
    pub flattened: FlatFormula,
    /// Final value
    pub value: BigDecimal,
}

/// Exact decimal formula calculator
///
/// Holds its own [`CalculatorOptions`]; calculators with different precisions
/// can be used side by side. A `Calculator` has no mutable state, so one
/// instance can be shared across threads.
///
/// # Example
/// ```rust
/// use decicalc_formula::{BigDecimal, Calculator, Formula};
///
/// let formula: Formula = "amount / amount * coeff".parse().unwrap();
/// let calc = Calculator::new();
/// let value = calc
///     .solve(&formula, &[BigDecimal::from(1000), BigDecimal::from(5)], &[BigDecimal::from(3)])
///     .unwrap();
/// assert_eq!(value, BigDecimal::from(600));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalculatorOptions,
}

impl Calculator {
    /// Calculator with default options (40 significant digits)
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with custom options
    pub fn with_options(options: CalculatorOptions) -> FormulaResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Calculator keeping `precision` significant digits
    pub fn with_precision(precision: u64) -> FormulaResult<Self> {
        Self::with_options(CalculatorOptions::with_precision(precision))
    }

    pub fn options(&self) -> &CalculatorOptions {
        &self.options
    }

    pub fn precision(&self) -> u64 {
        self.options.precision
    }

    /// Substitute queue values into the placeholders of `formula`
    pub fn replace_operands(
        &self,
        formula: &Formula,
        amounts: &[BigDecimal],
        coefficients: &[BigDecimal],
    ) -> FormulaResult<NumberFormula> {
        substitution::replace_operands(formula, amounts, coefficients)
    }

    /// Resolve every bracketed span to its value
    pub fn clear_brackets(&self, formula: NumberFormula) -> FormulaResult<FlatFormula> {
        brackets::clear_brackets(formula, self.options.precision)
    }

    /// Reduce a bracket-free formula to a single value
    pub fn calculate(&self, formula: FlatFormula) -> FormulaResult<BigDecimal> {
        evaluator::calculate(formula, self.options.precision)
    }

    /// Solve `formula` with the given substitution queues
    ///
    /// Returns the first error raised by any stage.
    pub fn solve(
        &self,
        formula: &Formula,
        amounts: &[BigDecimal],
        coefficients: &[BigDecimal],
    ) -> FormulaResult<BigDecimal> {
        let substituted = self.replace_operands(formula, amounts, coefficients)?;
        let flattened = self.clear_brackets(substituted)?;
        self.calculate(flattened)
    }

    /// Like [`solve`](Self::solve), also returning the intermediate formulas
    pub fn solve_traced(
        &self,
        formula: &Formula,
        amounts: &[BigDecimal],
        coefficients: &[BigDecimal],
    ) -> FormulaResult<Solution> {
        let substituted = self.replace_operands(formula, amounts, coefficients)?;
        tracing::debug!(formula = %substituted, "substituted operands");

        let flattened = self.clear_brackets(substituted.clone())?;
        tracing::debug!(formula = %flattened, "cleared brackets");

        let value = self.calculate(flattened.clone())?;
        Ok(Solution {
            substituted,
            flattened,
            value,
        })
    }
}

/// Solve `formula` with a default [`Calculator`]
pub fn solve(
    formula: &Formula,
    amounts: &[BigDecimal],
    coefficients: &[BigDecimal],
) -> FormulaResult<BigDecimal> {
    Calculator::new().solve(formula, amounts, coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn nums(values: &[i64]) -> Vec<BigDecimal> {
        values.iter().map(|&v| BigDecimal::from(v)).collect()
    }

    #[test]
    fn test_with_precision() {
        assert_eq!(Calculator::with_precision(12).unwrap().precision(), 12);
        assert_eq!(Calculator::new().precision(), 40);
        assert_eq!(
            Calculator::with_precision(0).unwrap_err(),
            FormulaError::InvalidPrecision(0)
        );
    }

    #[test]
    fn test_solve_traced_stages() {
        let formula: Formula = "amount / ( coeff * amount ) * coeff * coeff".parse().unwrap();
        let solution = Calculator::new()
            .solve_traced(&formula, &nums(&[100, 5]), &nums(&[2, 3, 10]))
            .unwrap();

        assert_eq!(solution.substituted.to_string(), "100 / ( 2 * 5 ) * 3 * 10");
        assert_eq!(solution.flattened.to_string(), "100 / 10 * 3 * 10");
        assert_eq!(solution.value, BigDecimal::from(300));
    }

    #[test]
    fn test_stages_compose_like_solve() {
        let calc = Calculator::new();
        let formula: Formula = "( amount - coeff ) * coeff".parse().unwrap();
        let amounts = nums(&[10]);
        let coefficients = nums(&[4, 3]);

        let substituted = calc.replace_operands(&formula, &amounts, &coefficients).unwrap();
        let flattened = calc.clear_brackets(substituted).unwrap();
        let value = calc.calculate(flattened).unwrap();

        assert_eq!(value, calc.solve(&formula, &amounts, &coefficients).unwrap());
        assert_eq!(value, BigDecimal::from(18));
    }

    #[test]
    fn test_independent_precisions() {
        let formula: Formula = "amount / amount".parse().unwrap();
        let amounts = nums(&[1, 3]);

        let coarse = Calculator::with_precision(3).unwrap();
        let fine = Calculator::with_precision(6).unwrap();

        assert_eq!(
            coarse.solve(&formula, &amounts, &[]).unwrap(),
            BigDecimal::from_str("0.333").unwrap()
        );
        assert_eq!(
            fine.solve(&formula, &amounts, &[]).unwrap(),
            BigDecimal::from_str("0.333333").unwrap()
        );
    }
}
