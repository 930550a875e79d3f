//! Core data model of the interpreter.
//!
//! This module contains the pieces with no control logic of their own:
//! - Symbols, head directions and control-state labels
//! - The unbounded `Tape`
//! - Transition rules and the deterministic `TransitionTable`
//! - Per-run execution `History`

mod history;
mod state;
mod symbol;
mod tape;
mod transition;

pub use history::{History, HistoryEntry};
pub use state::StateId;
pub use symbol::{Direction, Symbol, DEFAULT_BLANK};
pub use tape::{Tape, GROWTH_CHUNK, MARGIN};
pub use transition::{Transition, TransitionTable};
