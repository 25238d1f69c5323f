//! decicalc CLI - exact decimal formula calculator

mod job;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use decicalc_formula::{
    to_plain_string, BigDecimal, Calculator, CalculatorOptions, Formula, DEFAULT_PRECISION,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::job::{parse_decimals, Job};

#[derive(Parser)]
#[command(name = "decicalc")]
#[command(author, version, about = "Exact decimal formula calculator")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a formula given as tokens, e.g. `amount / ( coeff * amount )`
    Solve {
        /// Formula tokens (separate arguments or one quoted string)
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Comma-separated amounts, bound to `amount` placeholders in order
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        amounts: Vec<String>,

        /// Comma-separated coefficients, bound to `coefficient` placeholders in order
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        coefficients: Vec<String>,

        /// Significant digits kept by every operation
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: u64,

        /// Print the substituted and flattened formulas
        #[arg(short, long)]
        explain: bool,
    },

    /// Solve a JSON job file
    Run {
        /// Job file with `formula`, `amounts`, `coefficients` and optional `precision`
        file: PathBuf,

        /// Print the substituted and flattened formulas
        #[arg(short, long)]
        explain: bool,
    },

    /// Show a formula's canonical form and placeholder counts
    Inspect {
        /// Formula tokens (separate arguments or one quoted string)
        #[arg(required = true)]
        tokens: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lines = match cli.command {
        Commands::Solve {
            tokens,
            amounts,
            coefficients,
            precision,
            explain,
        } => {
            let formula = parse_formula(&tokens)?;
            let amounts = parse_decimals(&amounts).context("Invalid amounts")?;
            let coefficients = parse_decimals(&coefficients).context("Invalid coefficients")?;
            let options = CalculatorOptions::with_precision(precision);
            solve(&formula, &amounts, &coefficients, options, explain)?
        }
        Commands::Run { file, explain } => run_job(&file, explain)?,
        Commands::Inspect { tokens } => inspect(&tokens)?,
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Join token arguments so both `amount '*' coeff` and `"amount * coeff"` work
fn parse_formula(tokens: &[String]) -> Result<Formula> {
    let text = tokens.join(" ");
    text.parse::<Formula>()
        .with_context(|| format!("Invalid formula '{}'", text))
}

fn solve(
    formula: &Formula,
    amounts: &[BigDecimal],
    coefficients: &[BigDecimal],
    options: CalculatorOptions,
    explain: bool,
) -> Result<Vec<String>> {
    let calculator = Calculator::with_options(options).context("Invalid options")?;
    tracing::debug!(%formula, precision = calculator.precision(), "solving");

    let solution = calculator
        .solve_traced(formula, amounts, coefficients)
        .with_context(|| format!("Failed to solve '{}'", formula))?;
    let value = to_plain_string(&solution.value);

    if explain {
        Ok(vec![
            format!("Formula: {} = {}", solution.substituted, value),
            format!("Flattened: {} = {}", solution.flattened, value),
        ])
    } else {
        Ok(vec![value])
    }
}

fn run_job(path: &Path, explain: bool) -> Result<Vec<String>> {
    let job = Job::load(path)?;
    let amounts = job.amounts()?;
    let coefficients = job.coefficients()?;
    solve(&job.formula, &amounts, &coefficients, job.options, explain)
}

fn inspect(tokens: &[String]) -> Result<Vec<String>> {
    let formula = parse_formula(tokens)?;

    Ok(vec![
        format!("Formula: {}", formula),
        format!("Tokens: {}", formula.len()),
        format!("Amounts needed: {}", formula.amount_slots()),
        format!("Coefficients needed: {}", formula.coefficient_slots()),
    ])
}
