//! Operand substitution
//!
//! Replaces each placeholder with the next unconsumed value of its queue,
//! walking the formula left to right.

use crate::error::{FormulaError, FormulaResult};
use crate::stages::{NumberFormula, NumberToken};
use bigdecimal::BigDecimal;
use decicalc_core::{Formula, Slot, Token};
use std::slice;

/// Read cursors over the caller's substitution queues
///
/// The caller's slices are only borrowed; consuming a value advances a
/// private cursor.
struct OperandQueues<'a> {
    amounts: slice::Iter<'a, BigDecimal>,
    coefficients: slice::Iter<'a, BigDecimal>,
}

impl<'a> OperandQueues<'a> {
    fn new(amounts: &'a [BigDecimal], coefficients: &'a [BigDecimal]) -> Self {
        Self {
            amounts: amounts.iter(),
            coefficients: coefficients.iter(),
        }
    }

    fn next(&mut self, slot: Slot) -> Option<&'a BigDecimal> {
        match slot {
            Slot::Amount => self.amounts.next(),
            Slot::Coefficient => self.coefficients.next(),
        }
    }
}

/// Substitute values into every placeholder of `formula`
///
/// Operators and brackets pass through unchanged, so the result has the same
/// length and token order. Extra queue entries are ignored; a placeholder
/// with no value left fails with [`FormulaError::OperandMissing`].
pub fn replace_operands(
    formula: &Formula,
    amounts: &[BigDecimal],
    coefficients: &[BigDecimal],
) -> FormulaResult<NumberFormula> {
    let mut queues = OperandQueues::new(amounts, coefficients);

    let substituted = formula
        .iter()
        .enumerate()
        .map(|(position, token)| match *token {
            Token::Slot(slot) => queues
                .next(slot)
                .map(|value| NumberToken::Number(value.clone()))
                .ok_or(FormulaError::OperandMissing { slot, position }),
            Token::Operator(op) => Ok(NumberToken::Operator(op)),
            Token::Bracket(bracket) => Ok(NumberToken::Bracket(bracket)),
        })
        .collect::<FormulaResult<NumberFormula>>()?;

    let unused = queues.amounts.len() + queues.coefficients.len();
    if unused > 0 {
        tracing::trace!(unused, "ignoring trailing queue entries");
    }

    Ok(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decicalc_core::{Bracket, Operator};
    use pretty_assertions::assert_eq;

    fn nums(values: &[i64]) -> Vec<BigDecimal> {
        values.iter().map(|&v| BigDecimal::from(v)).collect()
    }

    #[test]
    fn test_replaces_in_order() {
        let formula: Formula = "amount / ( coeff * amount )".parse().unwrap();
        let result = replace_operands(&formula, &nums(&[100, 5]), &nums(&[2])).unwrap();

        assert_eq!(
            result.tokens(),
            &[
                NumberToken::Number(BigDecimal::from(100)),
                NumberToken::Operator(Operator::Divide),
                NumberToken::Bracket(Bracket::Open),
                NumberToken::Number(BigDecimal::from(2)),
                NumberToken::Operator(Operator::Multiply),
                NumberToken::Number(BigDecimal::from(5)),
                NumberToken::Bracket(Bracket::Close),
            ]
        );
    }

    #[test]
    fn test_queues_are_independent() {
        // Interleaving kinds does not shift either queue
        let formula: Formula = "coeff + amount + coeff + amount".parse().unwrap();
        let result = replace_operands(&formula, &nums(&[1, 2]), &nums(&[10, 20])).unwrap();
        assert_eq!(result.to_string(), "10 + 1 + 20 + 2");
    }

    #[test]
    fn test_trailing_entries_ignored() {
        let formula: Formula = "amount".parse().unwrap();
        let result = replace_operands(&formula, &nums(&[7, 8, 9]), &nums(&[1])).unwrap();
        assert_eq!(result.to_string(), "7");
    }

    #[test]
    fn test_operand_missing() {
        let formula: Formula = "amount * coeff * coeff".parse().unwrap();
        let err = replace_operands(&formula, &nums(&[100]), &nums(&[2])).unwrap_err();
        assert_eq!(
            err,
            FormulaError::OperandMissing {
                slot: Slot::Coefficient,
                position: 4,
            }
        );
    }

    #[test]
    fn test_caller_queues_untouched() {
        let amounts = nums(&[3]);
        let formula: Formula = "amount".parse().unwrap();
        replace_operands(&formula, &amounts, &[]).unwrap();
        replace_operands(&formula, &amounts, &[]).unwrap();
        assert_eq!(amounts, nums(&[3]));
    }
}
