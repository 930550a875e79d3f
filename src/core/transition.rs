//! Transition rules and the deterministic transition table.

use super::state::StateId;
use super::symbol::{Direction, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An immutable rule `(state, read) -> (next, write, direction)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Control state the rule applies in
    pub state: StateId,
    /// Symbol that must be under the head
    pub read: Symbol,
    /// Control state after the step
    pub next: StateId,
    /// Symbol written over `read`
    pub write: Symbol,
    /// Head movement after the write
    #[serde(rename = "move")]
    pub direction: Direction,
}

impl Transition {
    pub fn new(
        state: impl Into<StateId>,
        read: Symbol,
        next: impl Into<StateId>,
        write: Symbol,
        direction: Direction,
    ) -> Self {
        Self {
            state: state.into(),
            read,
            next: next.into(),
            write,
            direction,
        }
    }
}

/// Partial function from `(state, symbol)` to a transition.
///
/// Rules keep their insertion order for display purposes; lookups go
/// through a per-state index.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    rules: Vec<Transition>,
    index: HashMap<StateId, HashMap<Symbol, usize>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule.
    ///
    /// Returns the rejected rule if one already exists for the same
    /// `(state, read)` key, leaving the table unchanged.
    pub fn insert(&mut self, transition: Transition) -> Result<(), Transition> {
        let by_symbol = self.index.entry(transition.state.clone()).or_default();
        if by_symbol.contains_key(&transition.read) {
            return Err(transition);
        }
        by_symbol.insert(transition.read, self.rules.len());
        self.rules.push(transition);
        Ok(())
    }

    /// Find the rule for `(state, symbol)`.
    pub fn lookup(&self, state: &str, symbol: Symbol) -> Option<&Transition> {
        self.index
            .get(state)
            .and_then(|by_symbol| by_symbol.get(&symbol))
            .map(|&i| &self.rules[i])
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[Transition] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
