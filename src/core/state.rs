//! Control-state labels.
//!
//! Control states come from a loaded description, so they are plain
//! labels rather than a closed enum. Whether a label is final is a
//! property of the machine definition, not of the label itself.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Label of a control state.
///
/// # Example
///
/// ```rust
/// use turing_fib::core::StateId;
///
/// let state = StateId::new("scan_input");
/// assert_eq!(state.name(), "scan_input");
/// assert_eq!(state.to_string(), "scan_input");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
