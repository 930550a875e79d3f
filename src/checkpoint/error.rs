//! Checkpoint error types.

use crate::core::Symbol;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// JSON encoding or decoding failed
    #[error("JSON checkpoint error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed
    #[error("Binary checkpoint error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint was taken from a machine with another definition
    #[error("Checkpoint belongs to machine '{found}', not '{expected}'")]
    MachineMismatch { expected: String, found: String },

    #[error("Checkpoint state '{0}' is not declared by the machine")]
    UnknownState(String),

    #[error("Checkpoint tape uses blank '{found}', machine uses '{expected}'")]
    BlankMismatch { expected: Symbol, found: Symbol },

    /// Logical position 0 lies beyond the tape buffer
    #[error("Checkpoint tape places position 0 at index {origin} of {allocated} cells")]
    InconsistentTape { origin: usize, allocated: usize },

    /// The last history entry is not a snapshot of the checkpointed configuration
    #[error("Last history entry does not match state '{state}' with head at {head_position}")]
    SnapshotMismatch { state: String, head_position: isize },

    /// The history does not end at the checkpoint's step count
    #[error("Checkpoint is at step {steps} but its history ends at {last:?}")]
    HistoryMismatch { steps: usize, last: Option<usize> },
}
