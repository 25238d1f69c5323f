//! Bracket resolution
//!
//! Flattens a substituted formula with an explicit stack. Each `)` pops the
//! tokens back to its `(`, reduces them with the precedence evaluator and
//! pushes the value in their place, so the innermost brackets are resolved
//! first.

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::calculate;
use crate::stages::{FlatFormula, FlatToken, NumberFormula, NumberToken};
use decicalc_core::Bracket;

/// Entry on the resolver stack
#[derive(Debug)]
enum Frame {
    /// Sentinel for a `(` whose `)` has not been seen yet
    Open,
    Token(FlatToken),
}

/// Resolve every bracketed span of `formula` to its value
///
/// # Errors
/// - [`FormulaError::UnmatchedCloseBracket`] for a `)` with nothing open
/// - [`FormulaError::UnbalancedBrackets`] if a `(` is never closed
/// - any error of [`calculate`] on the bracket contents
pub fn clear_brackets(formula: NumberFormula, precision: u64) -> FormulaResult<FlatFormula> {
    let mut stack: Vec<Frame> = Vec::with_capacity(formula.len());
    let mut depth: usize = 0;

    for (position, token) in formula.0.into_iter().enumerate() {
        match token {
            NumberToken::Bracket(Bracket::Open) => {
                depth += 1;
                stack.push(Frame::Open);
            }
            NumberToken::Bracket(Bracket::Close) => {
                if depth == 0 {
                    return Err(FormulaError::UnmatchedCloseBracket { position });
                }
                depth -= 1;

                let contents = pop_bracket_contents(&mut stack, position)?;
                tracing::trace!(position, contents = %contents, "resolving bracket");
                let value = calculate(contents, precision)?;
                stack.push(Frame::Token(FlatToken::Number(value)));
            }
            NumberToken::Number(n) => stack.push(Frame::Token(FlatToken::Number(n))),
            NumberToken::Operator(op) => stack.push(Frame::Token(FlatToken::Operator(op))),
        }
    }

    if depth != 0 {
        return Err(FormulaError::UnbalancedBrackets { depth });
    }

    stack
        .into_iter()
        .map(|frame| match frame {
            Frame::Token(token) => Ok(token),
            Frame::Open => Err(FormulaError::MalformedBracketContents(
                "open bracket left after resolution".into(),
            )),
        })
        .collect()
}

/// Pop everything above the nearest open sentinel, in formula order
fn pop_bracket_contents(stack: &mut Vec<Frame>, position: usize) -> FormulaResult<FlatFormula> {
    let mut contents = Vec::new();
    loop {
        match stack.pop() {
            Some(Frame::Open) => break,
            Some(Frame::Token(token)) => contents.push(token),
            None => {
                return Err(FormulaError::MalformedBracketContents(format!(
                    "no opening bracket for ')' at token {}",
                    position
                )))
            }
        }
    }
    contents.reverse();
    Ok(FlatFormula(contents))
}
