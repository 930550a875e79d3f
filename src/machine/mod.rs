//! Execution engine.
//!
//! A `TuringMachine` pairs a shared, immutable `MachineDefinition` with
//! run-scoped state: the tape, the control state, the step counter and
//! the history. Runs are synchronous; the only way to bound one is the
//! step budget passed to `run`.

mod definition;
mod error;
#[allow(clippy::module_inception)]
mod machine;
mod outcome;

pub use definition::MachineDefinition;
pub use error::InputError;
pub use machine::{TuringMachine, DEFAULT_MAX_STEPS};
pub use outcome::{MachineStatus, Outcome, StepResult};
