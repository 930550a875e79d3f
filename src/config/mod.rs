//! Persisted machine descriptions.
//!
//! A description is a JSON document listing states, alphabet and
//! transitions:
//!
//! ```json
//! {
//!   "name": "append one",
//!   "states": ["scan", "done"],
//!   "initial_state": "scan",
//!   "final_states": ["done"],
//!   "blank": "_",
//!   "alphabet": ["1", "_"],
//!   "transitions": [
//!     { "state": "scan", "read": "1", "next": "scan", "write": "1", "move": "R" },
//!     { "state": "scan", "read": "_", "next": "done", "write": "1", "move": "S" }
//!   ]
//! }
//! ```
//!
//! Parsing only checks shape. Consistency (declared states, alphabet,
//! determinism) is checked by `MachineBuilder` when the description is
//! turned into a machine.

use crate::builder::{ConfigError, MachineBuilder};
use crate::core::{StateId, Symbol, Transition, DEFAULT_BLANK};
use crate::machine::{MachineDefinition, TuringMachine};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod error;

pub use error::LoadError;

fn default_blank() -> Symbol {
    DEFAULT_BLANK
}

/// Serializable machine description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub states: Vec<StateId>,

    pub initial_state: StateId,

    #[serde(default)]
    pub final_states: Vec<StateId>,

    #[serde(default = "default_blank")]
    pub blank: Symbol,

    pub alphabet: Vec<Symbol>,

    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl MachineConfig {
    /// Parse a description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            name = %config.name,
            transitions = config.transitions.len(),
            "loaded machine description"
        );
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_builder(self) -> MachineBuilder {
        MachineBuilder::new()
            .name(self.name)
            .states(self.states)
            .initial(self.initial_state)
            .final_states(self.final_states)
            .alphabet(self.alphabet)
            .blank(self.blank)
            .transitions(self.transitions)
    }

    pub fn into_definition(self) -> Result<MachineDefinition, ConfigError> {
        self.into_builder().build_definition()
    }

    pub fn into_machine(self) -> Result<TuringMachine, ConfigError> {
        self.into_builder().build()
    }
}

impl From<&MachineDefinition> for MachineConfig {
    fn from(definition: &MachineDefinition) -> Self {
        Self {
            name: definition.name().to_string(),
            description: None,
            states: definition.states().to_vec(),
            initial_state: definition.initial_state().clone(),
            final_states: definition.final_states().to_vec(),
            blank: definition.blank(),
            alphabet: definition.alphabet().to_vec(),
            transitions: definition.table().rules().to_vec(),
        }
    }
}

/// Load a description file and build a machine from it.
pub fn load_machine(path: impl AsRef<Path>) -> Result<TuringMachine, LoadError> {
    Ok(MachineConfig::load(path)?.into_machine()?)
}
