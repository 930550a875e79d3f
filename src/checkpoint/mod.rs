//! Checkpoint and resume functionality for machine runs.
//!
//! A checkpoint captures everything run-scoped (tape, control state,
//! step counter, status and history) so a long run can be stored and
//! resumed later on a machine built from the same description. The
//! transition table itself is not part of a checkpoint.

use crate::core::{History, StateId, Tape};
use crate::machine::{MachineStatus, TuringMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Name of the machine definition the run belongs to
    pub machine: String,

    /// Control state at the time of the checkpoint
    pub state: StateId,

    /// Steps taken so far
    pub steps: usize,

    /// Machine-level status
    pub status: MachineStatus,

    /// Full tape, margins included
    pub tape: Tape,

    /// History of the run up to the checkpoint
    pub history: History,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact bincode encoding.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl TuringMachine {
    /// Capture the current run.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            machine: self.definition.name().to_string(),
            state: self.state.clone(),
            steps: self.steps,
            status: self.status,
            tape: self.tape.clone(),
            history: self.history.clone(),
        }
    }

    /// Replace the current run with the one stored in `checkpoint`.
    ///
    /// The checkpoint must come from a machine with the same name, its
    /// state and blank must match this machine's definition, its tape
    /// must place logical position 0 inside the buffer, and its history
    /// must end with a snapshot of the checkpointed step, state and head.
    /// On error nothing changes.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if checkpoint.machine != self.definition.name() {
            return Err(CheckpointError::MachineMismatch {
                expected: self.definition.name().to_string(),
                found: checkpoint.machine,
            });
        }
        if !self.definition.has_state(checkpoint.state.name()) {
            return Err(CheckpointError::UnknownState(
                checkpoint.state.name().to_string(),
            ));
        }
        if checkpoint.tape.blank() != self.definition.blank() {
            return Err(CheckpointError::BlankMismatch {
                expected: self.definition.blank(),
                found: checkpoint.tape.blank(),
            });
        }
        let allocated = checkpoint.tape.allocated();
        if checkpoint.tape.origin() > allocated {
            return Err(CheckpointError::InconsistentTape {
                origin: checkpoint.tape.origin(),
                allocated,
            });
        }
        let Some(last) = checkpoint.history.last() else {
            return Err(CheckpointError::HistoryMismatch {
                steps: checkpoint.steps,
                last: None,
            });
        };
        if last.step != checkpoint.steps {
            return Err(CheckpointError::HistoryMismatch {
                steps: checkpoint.steps,
                last: Some(last.step),
            });
        }
        let head_position = checkpoint.tape.head_position();
        if last.state != checkpoint.state || last.head_position != head_position {
            return Err(CheckpointError::SnapshotMismatch {
                state: checkpoint.state.name().to_string(),
                head_position,
            });
        }

        debug!(
            id = %checkpoint.id,
            machine = %checkpoint.machine,
            steps = checkpoint.steps,
            "restoring checkpoint"
        );
        self.state = checkpoint.state;
        self.steps = checkpoint.steps;
        self.status = checkpoint.status;
        self.tape = checkpoint.tape;
        self.history = checkpoint.history;
        Ok(())
    }
}
