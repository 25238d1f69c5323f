//! JSON job files
//!
//! ```json
//! {
//!   "formula": ["amount", "/", "(", "coefficient", "*", "amount", ")"],
//!   "amounts": ["100", 5],
//!   "coefficients": ["2"],
//!   "precision": 40
//! }
//! ```

use anyhow::{Context, Result};
use decicalc_formula::{BigDecimal, CalculatorOptions, Formula};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// A decimal given either as a JSON string or a JSON number
///
/// Strings keep every digit; numbers go through `f64` when parsed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DecimalInput {
    Text(String),
    Number(serde_json::Number),
}

impl DecimalInput {
    pub fn to_decimal(&self) -> Result<BigDecimal> {
        let text = match self {
            DecimalInput::Text(s) => s.trim().to_string(),
            DecimalInput::Number(n) => n.to_string(),
        };
        BigDecimal::from_str(&text).with_context(|| format!("Invalid decimal '{}'", text))
    }
}

/// A formula with its substitution queues
#[derive(Debug, Deserialize)]
pub struct Job {
    pub formula: Formula,
    #[serde(default)]
    pub amounts: Vec<DecimalInput>,
    #[serde(default)]
    pub coefficients: Vec<DecimalInput>,
    #[serde(flatten)]
    pub options: CalculatorOptions,
}

impl Job {
    /// Read a job from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse job '{}'", path.display()))
    }

    pub fn amounts(&self) -> Result<Vec<BigDecimal>> {
        decimals(&self.amounts).context("Invalid amounts")
    }

    pub fn coefficients(&self) -> Result<Vec<BigDecimal>> {
        decimals(&self.coefficients).context("Invalid coefficients")
    }
}

fn decimals(inputs: &[DecimalInput]) -> Result<Vec<BigDecimal>> {
    inputs.iter().map(DecimalInput::to_decimal).collect()
}

/// Parse decimals given on the command line
pub fn parse_decimals(values: &[String]) -> Result<Vec<BigDecimal>> {
    values
        .iter()
        .map(|v| {
            BigDecimal::from_str(v.trim()).with_context(|| format!("Invalid decimal '{}'", v))
        })
        .collect()
}
