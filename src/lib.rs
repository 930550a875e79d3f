//! Turing-Fib: a deterministic single-tape Turing machine interpreter
//!
//! The interpreter is a plain library: a machine is built once from a
//! description, then initialized and run as many times as needed. Each
//! run owns its tape, control state, step counter and history; the
//! transition table is shared and never mutated.
//!
//! # Core Concepts
//!
//! - **Tape**: Unbounded in both directions, grown in chunks on demand
//! - **Transitions**: Deterministic `(state, symbol)` lookup table
//! - **Machine**: Drives a run to acceptance, a stuck configuration or an exhausted step budget
//! - **History**: One snapshot per configuration the run passes through
//!
//! The bundled description in [`fibonacci`] computes F(n) in unary.
//!
//! # Example
//!
//! ```rust
//! use turing_fib::{MachineBuilder, Outcome, TransitionBuilder};
//! use turing_fib::core::Direction;
//!
//! let erase = TransitionBuilder::new()
//!     .from("erase")
//!     .on('1')
//!     .to("erase")
//!     .write('_')
//!     .moves(Direction::Right);
//! let finish = TransitionBuilder::new()
//!     .from("erase")
//!     .on('_')
//!     .to("done")
//!     .moves(Direction::Stay);
//!
//! let mut machine = MachineBuilder::new()
//!     .name("eraser")
//!     .states(["erase", "done"])
//!     .initial("erase")
//!     .final_state("done")
//!     .alphabet(['1', '_'])
//!     .transition(erase)
//!     .unwrap()
//!     .transition(finish)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! machine.initialize("111").unwrap();
//! assert_eq!(machine.run(100), Outcome::Accepted { steps: 4 });
//! assert_eq!(machine.content(), "_");
//! assert_eq!(machine.history().len(), 5);
//! ```

pub mod analysis;
pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod diagram;
pub mod fibonacci;
pub mod machine;

// Re-export commonly used types
pub use builder::{ConfigError, MachineBuilder, TransitionBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{LoadError, MachineConfig};
pub use core::{Direction, History, HistoryEntry, StateId, Symbol, Tape, Transition};
pub use machine::{
    InputError, MachineDefinition, MachineStatus, Outcome, StepResult, TuringMachine,
    DEFAULT_MAX_STEPS,
};
