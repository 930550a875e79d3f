//! Execution history of a run.
//!
//! Every configuration the machine passes through is captured as an
//! immutable snapshot. The history belongs to a single run and is
//! replaced when the machine is initialized again.

use super::state::StateId;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Snapshot of one machine configuration.
///
/// `head_position` is a logical tape position, so it stays meaningful
/// after the tape grows to the left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Steps taken when the snapshot was recorded
    pub step: usize,
    /// Control state at that point
    pub state: StateId,
    /// Logical head position
    pub head_position: isize,
    /// Trimmed tape content
    pub tape: String,
    /// Symbol under the head
    pub symbol: Symbol,
}

/// Ordered, append-only sequence of snapshots.
///
/// # Example
///
/// ```rust
/// use turing_fib::core::{History, HistoryEntry, StateId};
///
/// let mut history = History::new();
/// history.record(HistoryEntry {
///     step: 0,
///     state: StateId::new("q0"),
///     head_position: 0,
///     tape: "1".to_string(),
///     symbol: '1',
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.get_path(), vec![&StateId::new("q0")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Control states visited, in order, starting with the initial one.
    pub fn get_path(&self) -> Vec<&StateId> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
