//! Fixed-precision decimal arithmetic
//!
//! Values are exact [`BigDecimal`]s. Every arithmetic result is rounded to the
//! configured number of significant digits; inputs are never rounded.

use crate::error::{FormulaError, FormulaResult};
use bigdecimal::{BigDecimal, RoundingMode};
use decicalc_core::Operator;
use num_bigint::BigInt;
use num_traits::Zero;
use std::num::NonZeroU64;

/// Extra digits computed before a quotient is rounded
const GUARD_DIGITS: u64 = 2;

/// Longest run of padding zeros rendered in plain notation
const MAX_PLAIN_ZEROS: u64 = 100;

/// Round to `precision` significant digits, half away from zero
pub fn round(value: BigDecimal, precision: u64) -> FormulaResult<BigDecimal> {
    let digits = NonZeroU64::new(precision).ok_or(FormulaError::InvalidPrecision(precision))?;
    Ok(value.with_precision_round(digits, RoundingMode::HalfUp))
}

/// Apply a binary operator, rounding the result to `precision` significant digits
pub fn combine(
    lhs: &BigDecimal,
    op: Operator,
    rhs: &BigDecimal,
    precision: u64,
) -> FormulaResult<BigDecimal> {
    let exact = match op {
        Operator::Multiply => lhs * rhs,
        Operator::Divide => return divide(lhs, rhs, precision),
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
    };
    round(exact, precision)
}

/// Divide to `precision` significant digits
///
/// The quotient is computed on integer mantissas with the numerator widened
/// until it carries `precision + GUARD_DIGITS` more digits than the divisor.
pub fn divide(lhs: &BigDecimal, rhs: &BigDecimal, precision: u64) -> FormulaResult<BigDecimal> {
    if rhs.is_zero() {
        return Err(FormulaError::DivisionByZero);
    }

    let (numerator, numerator_scale) = lhs.as_bigint_and_exponent();
    let (denominator, denominator_scale) = rhs.as_bigint_and_exponent();

    let wanted = precision + GUARD_DIGITS + rhs.digits();
    let shift = wanted.saturating_sub(lhs.digits());
    let shift = u32::try_from(shift).map_err(|_| FormulaError::InvalidPrecision(precision))?;

    let widened = numerator * BigInt::from(10u32).pow(shift);
    let quotient = widened / denominator;
    let scale = numerator_scale - denominator_scale + i64::from(shift);

    round(BigDecimal::new(quotient, scale), precision)
}

/// Render a value in plain positional notation without trailing zeros
///
/// Values that would need more than `MAX_PLAIN_ZEROS` padding zeros are
/// written as `<digits>E<exponent>` instead.
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();

    if digits.is_zero() {
        return "0".to_string();
    }

    if scale <= 0 {
        let zeros = scale.unsigned_abs();
        if zeros > MAX_PLAIN_ZEROS {
            return format!("{}E+{}", digits, zeros);
        }
        return format!("{}{}", digits, "0".repeat(zeros as usize));
    }

    let negative = digits < BigInt::zero();
    let mut magnitude = (if negative { -digits } else { digits }).to_string();
    if scale.unsigned_abs() > MAX_PLAIN_ZEROS + magnitude.len() as u64 {
        let sign = if negative { "-" } else { "" };
        return format!("{}{}E-{}", sign, magnitude, scale);
    }
    let scale = scale as usize;
    if magnitude.len() <= scale {
        let padding = "0".repeat(scale + 1 - magnitude.len());
        magnitude.insert_str(0, &padding);
    }
    magnitude.insert(magnitude.len() - scale, '.');

    if negative {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}
