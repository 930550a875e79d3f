//! Fibonacci in unary on the bundled machine.
//!
//! The interpreter only knows tapes and transitions. This module is the
//! caller that gives the tape a meaning: it encodes `n` as `1^n`, runs
//! the bundled description and decodes the accepted tape back into a
//! number.

use crate::builder::ConfigError;
use crate::config::{LoadError, MachineConfig};
use crate::machine::{InputError, Outcome, TuringMachine};
use thiserror::Error;
use tracing::debug;

/// JSON description of the Fibonacci machine.
pub const FIBONACCI_DESCRIPTION: &str = include_str!("../config/fibonacci.json");

/// Unary digit.
pub const UNARY_DIGIT: char = '1';

/// Errors from the Fibonacci front end.
#[derive(Debug, Error)]
pub enum FibonacciError {
    #[error("Bundled description is invalid: {0}")]
    Description(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),
}

/// Result of computing F(n) on a machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Computation {
    pub n: usize,
    pub outcome: Outcome,
    /// Trimmed tape content when the run ended
    pub tape: String,
    /// Decoded value; only present when the run was accepted
    pub value: Option<u64>,
}

/// Encode `n` in unary. Zero is the empty string.
pub fn to_unary(n: usize) -> String {
    UNARY_DIGIT.to_string().repeat(n)
}

/// Decode a unary tape by counting its digits.
///
/// A lone blank and the empty string both decode to zero.
pub fn from_unary(tape: &str) -> u64 {
    tape.chars().filter(|&c| c == UNARY_DIGIT).count() as u64
}

/// Reference implementation, F(0) = 0, F(1) = 1.
pub fn fibonacci(n: usize) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    a
}

/// Build the bundled Fibonacci machine.
pub fn machine() -> Result<TuringMachine, FibonacciError> {
    from_description(FIBONACCI_DESCRIPTION)
}

fn from_description(json: &str) -> Result<TuringMachine, FibonacciError> {
    let config = MachineConfig::from_json(json)?;
    Ok(config.into_machine()?)
}

/// Run `machine` on the unary encoding of `n`.
pub fn compute_on(
    machine: &mut TuringMachine,
    n: usize,
    max_steps: usize,
) -> Result<Computation, FibonacciError> {
    machine.initialize(&to_unary(n))?;
    let outcome = machine.run(max_steps);
    let tape = machine.content();
    let value = outcome.is_accepted().then(|| from_unary(&tape));

    debug!(n, steps = outcome.steps(), ?value, "fibonacci run finished");
    Ok(Computation {
        n,
        outcome,
        tape,
        value,
    })
}

/// Compute F(n) on a fresh bundled machine.
pub fn compute(n: usize, max_steps: usize) -> Result<Computation, FibonacciError> {
    let mut machine = machine()?;
    compute_on(&mut machine, n, max_steps)
}
