//! Validated, immutable description of a machine.

use crate::core::{StateId, Symbol, TransitionTable};

/// Everything a machine needs besides its run-scoped tape and history.
///
/// Definitions are only produced by `MachineBuilder::build`, which
/// checks that every referenced state and symbol is declared and that
/// the transition table is deterministic. They never change afterwards
/// and are shared between runs through an `Arc`.
#[derive(Clone, Debug)]
pub struct MachineDefinition {
    pub(crate) name: String,
    pub(crate) states: Vec<StateId>,
    pub(crate) initial: StateId,
    pub(crate) finals: Vec<StateId>,
    pub(crate) alphabet: Vec<Symbol>,
    pub(crate) blank: Symbol,
    pub(crate) table: TransitionTable,
}

impl MachineDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared control states, in declaration order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn initial_state(&self) -> &StateId {
        &self.initial
    }

    pub fn final_states(&self) -> &[StateId] {
        &self.finals
    }

    /// Declared tape alphabet, blank included.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn blank(&self) -> Symbol {
        self.blank
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn is_final(&self, state: &str) -> bool {
        self.finals.iter().any(|f| f.name() == state)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s.name() == state)
    }

    pub fn has_symbol(&self, symbol: Symbol) -> bool {
        self.alphabet.contains(&symbol)
    }
}
