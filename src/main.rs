//! Turing-Fib CLI
//!
//! # Commands
//!
//! - `run`: Run the machine on `1^n` (or any input) and print the outcome
//! - `analyze`: Measure step counts and timings for F(0)..F(max-n) and fit polynomials
//! - `diagram`: Print the state graph as Graphviz DOT or as a text table

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
use turing_fib::analysis::{self, Fit, Measurement};
use turing_fib::{config, diagram, fibonacci, TuringMachine, DEFAULT_MAX_STEPS};

/// Degrees fitted by `analyze`.
const FIT_DEGREES: [usize; 3] = [1, 2, 3];

/// Turing-Fib - unary Fibonacci on a Turing machine
#[derive(Parser)]
#[command(name = "turing-fib")]
#[command(version)]
#[command(about = "Deterministic single-tape Turing machine computing Fibonacci numbers in unary")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the machine once
    Run {
        /// Compute F(n); the input is n in unary
        #[arg(required_unless_present = "unary", conflicts_with = "unary")]
        n: Option<usize>,

        /// Raw input tape instead of n
        #[arg(long)]
        unary: Option<String>,

        /// Print every recorded configuration
        #[arg(long)]
        trace: bool,

        #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,

        /// Machine description to use instead of the bundled one
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Measure runs for n = 0..=max-n and fit polynomials to the timings
    Analyze {
        #[arg(long, default_value_t = 5)]
        max_n: usize,

        #[arg(long, default_value_t = 100)]
        repetitions: u32,

        #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
        max_steps: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the transition graph
    Diagram {
        #[arg(long, value_enum, default_value_t = DiagramFormat::Dot)]
        format: DiagramFormat,

        /// Machine description to use instead of the bundled one
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DiagramFormat {
    Dot,
    Table,
}

#[derive(Serialize)]
struct AnalysisReport {
    measurements: Vec<Measurement>,
    time_fits: Vec<Fit>,
    step_fits: Vec<Fit>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            n,
            unary,
            trace,
            max_steps,
            config,
        } => run(n, unary, trace, max_steps, config.as_deref()),
        Commands::Analyze {
            max_n,
            repetitions,
            max_steps,
            json,
        } => analyze(max_n, repetitions, max_steps, json),
        Commands::Diagram { format, config } => {
            let machine = load(config.as_deref())?;
            let definition = machine.definition();
            match format {
                DiagramFormat::Dot => print!("{}", diagram::to_dot(definition)),
                DiagramFormat::Table => print!("{}", diagram::transition_table(definition)),
            }
            Ok(())
        }
    }
}

fn load(path: Option<&Path>) -> Result<TuringMachine> {
    match path {
        Some(path) => config::load_machine(path)
            .with_context(|| format!("Failed to load machine from {}", path.display())),
        None => fibonacci::machine().context("Failed to build the bundled Fibonacci machine"),
    }
}

fn run(
    n: Option<usize>,
    unary: Option<String>,
    trace: bool,
    max_steps: usize,
    config: Option<&Path>,
) -> Result<()> {
    let mut machine = load(config)?;
    let input = match (n, unary) {
        (_, Some(unary)) => unary,
        (Some(n), None) => fibonacci::to_unary(n),
        (None, None) => bail!("Either <N> or --unary is required"),
    };

    machine
        .initialize(&input)
        .with_context(|| format!("Rejected input '{input}'"))?;
    let outcome = machine.run(max_steps);

    if trace {
        for entry in machine.history() {
            println!(
                "{:>6}  {:<16} {:>5}  [{}]  {}",
                entry.step, entry.state, entry.head_position, entry.symbol, entry.tape
            );
        }
        println!();
    }

    println!("Machine: {}", machine.definition().name());
    println!("Input:   {input:?}");
    println!("Outcome: {outcome}");
    println!("Tape:    {}", machine.content());
    if outcome.is_accepted() {
        let value = fibonacci::from_unary(&machine.content());
        match n {
            Some(n) if config.is_none() => {
                println!("F({n}) = {value}");
                let expected = fibonacci::fibonacci(n);
                if value != expected {
                    warn!(n, value, expected, "machine result differs from reference");
                }
            }
            _ => println!("Value:   {value}"),
        }
    }
    Ok(())
}

fn analyze(max_n: usize, repetitions: u32, max_steps: usize, json: bool) -> Result<()> {
    let mut machine = fibonacci::machine()?;
    let ns: Vec<usize> = (0..=max_n).collect();
    let measurements = analysis::measure(&mut machine, &ns, repetitions, max_steps)?;

    let xs: Vec<f64> = measurements.iter().map(|m| m.n as f64).collect();
    let times: Vec<f64> = measurements.iter().map(Measurement::mean_millis).collect();
    let steps: Vec<f64> = measurements.iter().map(|m| m.steps as f64).collect();
    let report = AnalysisReport {
        time_fits: fits(&xs, &times),
        step_fits: fits(&xs, &steps),
        measurements,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:>4}  {:>12}  {:>10}  {:>12}",
        "n", "F(n)", "steps", "mean (ms)"
    );
    for m in &report.measurements {
        let value = m
            .value
            .map_or_else(|| "-".to_string(), |value| value.to_string());
        println!(
            "{:>4}  {:>12}  {:>10}  {:>12.6}",
            m.n,
            value,
            m.steps,
            m.mean_millis()
        );
    }
    print_fits("Time (ms)", &report.time_fits);
    print_fits("Steps", &report.step_fits);
    Ok(())
}

/// Fit every degree the data supports; degrees that cannot be fitted are skipped.
fn fits(xs: &[f64], ys: &[f64]) -> Vec<Fit> {
    FIT_DEGREES
        .iter()
        .filter_map(|&degree| match analysis::fit_degrees(xs, ys, &[degree]) {
            Ok(mut fits) => fits.pop(),
            Err(e) => {
                warn!(degree, error = %e, "skipping fit");
                None
            }
        })
        .collect()
}

fn print_fits(label: &str, fits: &[Fit]) {
    println!();
    println!("{label}:");
    for fit in fits {
        println!(
            "  degree {}: {}  (r² = {:.4})",
            fit.polynomial.degree(),
            fit.polynomial,
            fit.r_squared
        );
    }
}
