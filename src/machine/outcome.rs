//! Step and run results.

use crate::core::{StateId, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal condition of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The control state is a declared final state
    Accepted { steps: usize },

    /// No transition exists for the current `(state, symbol)` pair
    Stuck {
        steps: usize,
        state: StateId,
        symbol: Symbol,
    },

    /// The step budget ran out first
    Exhausted { steps: usize },
}

impl Outcome {
    /// Steps taken when the run ended.
    pub fn steps(&self) -> usize {
        match self {
            Self::Accepted { steps } | Self::Stuck { steps, .. } | Self::Exhausted { steps } => {
                *steps
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { steps } => write!(f, "accepted after {steps} steps"),
            Self::Stuck {
                steps,
                state,
                symbol,
            } => write!(
                f,
                "stuck after {steps} steps: no transition for ({state}, '{symbol}')"
            ),
            Self::Exhausted { steps } => write!(f, "step budget exhausted after {steps} steps"),
        }
    }
}

/// Result of executing a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// A transition was applied
    Continued,

    /// Nothing was applied; the machine is in a terminal condition
    Halted(Outcome),
}

/// Machine-level execution state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    /// Initialized, no step attempted yet
    Ready,
    /// At least one transition applied, not halted
    Running,
    Accepted,
    Stuck,
    Exhausted,
}

impl MachineStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Stuck | Self::Exhausted)
    }
}
