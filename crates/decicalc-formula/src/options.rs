//! Calculator configuration

use crate::error::{FormulaError, FormulaResult};

/// Significant digits used when no precision is configured
pub const DEFAULT_PRECISION: u64 = 40;

/// Options for a [`Calculator`](crate::Calculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CalculatorOptions {
    /// Significant digits kept by every arithmetic result (default: 40)
    pub precision: u64,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorOptions {
    /// Options with the given precision
    pub fn with_precision(precision: u64) -> Self {
        Self { precision }
    }

    /// Check that the options describe a usable calculator
    pub fn validate(&self) -> FormulaResult<()> {
        if self.precision == 0 {
            return Err(FormulaError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
