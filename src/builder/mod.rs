//! Builder API for machine construction.
//!
//! This module provides fluent builders and a macro for describing
//! machines in code. Every path ends in `MachineBuilder::build`, which
//! is the single place where descriptions are validated.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::ConfigError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;
