//! Input errors raised when starting a run.

use crate::core::Symbol;
use thiserror::Error;

/// Errors that can occur when initializing a machine with an input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Input contains the blank symbol '{symbol}' at index {index}")]
    BlankSymbol { symbol: Symbol, index: usize },

    #[error("Input symbol '{symbol}' at index {index} is not in the tape alphabet")]
    UnknownSymbol { symbol: Symbol, index: usize },
}
