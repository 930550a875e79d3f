//! Builder for constructing machines.

use crate::builder::error::ConfigError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{StateId, Symbol, Transition, TransitionTable, DEFAULT_BLANK};
use crate::machine::{MachineDefinition, TuringMachine};
use std::sync::Arc;

const DEFAULT_NAME: &str = "Turing machine";

/// Builder for constructing machines with a fluent API.
///
/// Declaring the same state or symbol twice is harmless; everything
/// else inconsistent is reported by `build`.
#[derive(Clone, Debug)]
pub struct MachineBuilder {
    name: Option<String>,
    states: Vec<StateId>,
    initial: Option<StateId>,
    finals: Vec<StateId>,
    alphabet: Vec<Symbol>,
    blank: Symbol,
    transitions: Vec<Transition>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            states: Vec::new(),
            initial: None,
            finals: Vec::new(),
            alphabet: Vec::new(),
            blank: DEFAULT_BLANK,
            transitions: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a control state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        let state = state.into();
        if !self.states.contains(&state) {
            self.states.push(state);
        }
        self
    }

    /// Declare several control states.
    pub fn states<I, S>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        states.into_iter().fold(self, |builder, s| builder.state(s))
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, state: impl Into<StateId>) -> Self {
        let state = state.into();
        if !self.finals.contains(&state) {
            self.finals.push(state);
        }
        self
    }

    pub fn final_states<I, S>(self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        states
            .into_iter()
            .fold(self, |builder, s| builder.final_state(s))
    }

    /// Declare a tape symbol.
    pub fn symbol(mut self, symbol: Symbol) -> Self {
        if !self.alphabet.contains(&symbol) {
            self.alphabet.push(symbol);
        }
        self
    }

    pub fn alphabet(self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        symbols
            .into_iter()
            .fold(self, |builder, s| builder.symbol(s))
    }

    /// Set the blank symbol. It must also be declared in the alphabet.
    pub fn blank(mut self, blank: Symbol) -> Self {
        self.blank = blank;
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, ConfigError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Validate the description and produce a shareable definition.
    pub fn build_definition(self) -> Result<MachineDefinition, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;

        if !self.states.contains(&initial) {
            return Err(ConfigError::UndeclaredInitialState(
                initial.name().to_string(),
            ));
        }
        if let Some(undeclared) = self.finals.iter().find(|f| !self.states.contains(*f)) {
            return Err(ConfigError::UndeclaredFinalState(
                undeclared.name().to_string(),
            ));
        }
        if !self.alphabet.contains(&self.blank) {
            return Err(ConfigError::BlankNotInAlphabet(self.blank));
        }

        let mut table = TransitionTable::new();
        for transition in self.transitions {
            for referenced in [&transition.state, &transition.next] {
                if !self.states.contains(referenced) {
                    return Err(ConfigError::UndeclaredState {
                        state: transition.state.name().to_string(),
                        read: transition.read,
                        undeclared: referenced.name().to_string(),
                    });
                }
            }
            for symbol in [transition.read, transition.write] {
                if !self.alphabet.contains(&symbol) {
                    return Err(ConfigError::UndeclaredSymbol {
                        state: transition.state.name().to_string(),
                        read: transition.read,
                        symbol,
                    });
                }
            }
            if let Err(rejected) = table.insert(transition) {
                return Err(ConfigError::DuplicateTransition {
                    state: rejected.state.name().to_string(),
                    read: rejected.read,
                });
            }
        }

        Ok(MachineDefinition {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            states: self.states,
            initial,
            finals: self.finals,
            alphabet: self.alphabet,
            blank: self.blank,
            table,
        })
    }

    /// Build the machine.
    /// Returns an error if the description is inconsistent.
    pub fn build(self) -> Result<TuringMachine, ConfigError> {
        let definition = self.build_definition()?;
        Ok(TuringMachine::new(Arc::new(definition)))
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
