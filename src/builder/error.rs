//! Configuration errors for machine and transition builders.

use crate::core::Symbol;
use thiserror::Error;

/// Errors that make a machine description unusable.
///
/// All of them are detected by `MachineBuilder::build`, before any run
/// can start.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{0}' is not a declared state")]
    UndeclaredInitialState(String),

    #[error("Final state '{0}' is not a declared state")]
    UndeclaredFinalState(String),

    #[error("Transition ({state}, '{read}') refers to undeclared state '{undeclared}'")]
    UndeclaredState {
        state: String,
        read: Symbol,
        undeclared: String,
    },

    #[error("Transition ({state}, '{read}') uses symbol '{symbol}' outside the tape alphabet")]
    UndeclaredSymbol {
        state: String,
        read: Symbol,
        symbol: Symbol,
    },

    #[error("Blank symbol '{0}' is not in the tape alphabet")]
    BlankNotInAlphabet(Symbol),

    #[error("Duplicate transition for ({state}, '{read}')")]
    DuplicateTransition { state: String, read: Symbol },

    #[error("Transition {field} not specified. Call .{field}(..) before .build()")]
    IncompleteTransition { field: &'static str },
}
