//! Empirical cost analysis of the Fibonacci machine.
//!
//! Runs the machine repeatedly for a range of inputs, records step
//! counts and mean wall-clock time, and fits polynomials to the
//! measurements by least squares.

use crate::fibonacci::{self, FibonacciError};
use crate::machine::TuringMachine;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Pivot magnitude below which the normal equations count as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Errors from polynomial fitting.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("Got {xs} x values but {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("Degree {degree} needs at least {} points, got {points}", .degree + 1)]
    NotEnoughPoints { points: usize, degree: usize },

    #[error("Normal equations are singular")]
    Singular,
}

/// Cost of one input size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Measurement {
    pub n: usize,
    /// Decoded result, `None` if the run was not accepted
    pub value: Option<u64>,
    pub steps: usize,
    /// Mean wall-clock time of one initialize-and-run
    pub mean: Duration,
}

impl Measurement {
    pub fn mean_millis(&self) -> f64 {
        self.mean.as_secs_f64() * 1000.0
    }
}

/// Run F(n) `repetitions` times for every `n`, reusing one machine.
pub fn measure(
    machine: &mut TuringMachine,
    ns: &[usize],
    repetitions: u32,
    max_steps: usize,
) -> Result<Vec<Measurement>, FibonacciError> {
    let repetitions = repetitions.max(1);
    let mut measurements = Vec::with_capacity(ns.len());

    for &n in ns {
        let start = Instant::now();
        let mut computation = fibonacci::compute_on(machine, n, max_steps)?;
        for _ in 1..repetitions {
            computation = fibonacci::compute_on(machine, n, max_steps)?;
        }
        let mean = start.elapsed() / repetitions;

        debug!(n, steps = computation.outcome.steps(), ?mean, "measured");
        measurements.push(Measurement {
            n,
            value: computation.value,
            steps: computation.outcome.steps(),
            mean,
        });
    }

    Ok(measurements)
}

/// Polynomial with coefficients in ascending powers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    /// Highest power first, e.g. `1.5000 n^2 + 0.2500 n - 3.0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (power, &c)) in self.coefficients.iter().enumerate().rev().enumerate() {
            let sign = if c < 0.0 { "-" } else { "+" };
            if i == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {sign} ")?;
            }
            write!(f, "{:.4}", c.abs())?;
            match power {
                0 => {}
                1 => write!(f, " n")?,
                p => write!(f, " n^{p}")?,
            }
        }
        Ok(())
    }
}

/// One fitted polynomial and its goodness of fit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Fit {
    pub polynomial: Polynomial,
    pub r_squared: f64,
}

/// Least-squares polynomial fit of the given degree.
pub fn polyfit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Polynomial, FitError> {
    if xs.len() != ys.len() {
        return Err(FitError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let size = degree + 1;
    if xs.len() < size {
        return Err(FitError::NotEnoughPoints {
            points: xs.len(),
            degree,
        });
    }

    // Normal equations: (VᵀV) c = Vᵀy for the Vandermonde matrix V.
    let mut matrix = vec![vec![0.0; size]; size];
    let mut rhs = vec![0.0; size];
    for (&x, &y) in xs.iter().zip(ys) {
        let powers: Vec<f64> = (0..2 * size - 1).map(|p| x.powi(p as i32)).collect();
        for row in 0..size {
            for col in 0..size {
                matrix[row][col] += powers[row + col];
            }
            rhs[row] += powers[row] * y;
        }
    }

    let coefficients = solve(matrix, rhs).ok_or(FitError::Singular)?;
    Ok(Polynomial { coefficients })
}

/// Coefficient of determination. Zero when `ys` has no variance.
pub fn r_squared(polynomial: &Polynomial, xs: &[f64], ys: &[f64]) -> f64 {
    if ys.is_empty() {
        return 0.0;
    }
    let mean = ys.iter().sum::<f64>() / ys.len() as f64;
    let ss_tot: f64 = ys.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| (y - polynomial.eval(x)).powi(2))
        .sum();
    1.0 - ss_res / ss_tot
}

/// Fit every degree in `degrees`.
pub fn fit_degrees(xs: &[f64], ys: &[f64], degrees: &[usize]) -> Result<Vec<Fit>, FitError> {
    degrees
        .iter()
        .map(|&degree| {
            let polynomial = polyfit(xs, ys, degree)?;
            let r_squared = r_squared(&polynomial, xs, ys);
            Ok(Fit {
                polynomial,
                r_squared,
            })
        })
        .collect()
}

/// Gaussian elimination with partial pivoting.
fn solve(mut matrix: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Option<Vec<f64>> {
    let size = rhs.len();
    for col in 0..size {
        let magnitude = |row: usize| matrix[row][col].abs();
        let pivot = (col..size)
            .max_by(|&i, &j| magnitude(i).total_cmp(&magnitude(j)))?;
        if matrix[pivot][col].abs() < SINGULAR_EPSILON {
            return None;
        }
        matrix.swap(col, pivot);
        rhs.swap(col, pivot);

        let (upper, lower) = matrix.split_at_mut(col + 1);
        let pivot_row = &upper[col];
        let (done, pending) = rhs.split_at_mut(col + 1);
        let pivot_rhs = done[col];
        for (row, value) in lower.iter_mut().zip(pending.iter_mut()) {
            let factor = row[col] / pivot_row[col];
            for (cell, &above) in row[col..].iter_mut().zip(&pivot_row[col..]) {
                *cell -= factor * above;
            }
            *value -= factor * pivot_rhs;
        }
    }

    let mut solution = vec![0.0; size];
    for (row, coefficients) in matrix.iter().enumerate().rev() {
        let tail: f64 = coefficients[row + 1..]
            .iter()
            .zip(&solution[row + 1..])
            .map(|(a, x)| a * x)
            .sum();
        solution[row] = (rhs[row] - tail) / coefficients[row];
    }
    Some(solution)
}
