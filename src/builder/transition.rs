//! Builder for constructing transition rules.

use crate::builder::error::ConfigError;
use crate::core::{Direction, StateId, Symbol, Transition};

/// Builder for a single `(state, read) -> (next, write, move)` rule.
///
/// The written symbol defaults to the one read, so rules that only move
/// the head can skip `.write(..)`.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<StateId>,
    read: Option<Symbol>,
    to: Option<StateId>,
    write: Option<Symbol>,
    direction: Option<Direction>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<StateId>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the symbol that must be under the head (required).
    pub fn on(mut self, symbol: Symbol) -> Self {
        self.read = Some(symbol);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<StateId>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Set the symbol to write (optional).
    pub fn write(mut self, symbol: Symbol) -> Self {
        self.write = Some(symbol);
        self
    }

    /// Set the head movement (required).
    pub fn moves(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, ConfigError> {
        let state = self
            .from
            .ok_or(ConfigError::IncompleteTransition { field: "from" })?;
        let read = self
            .read
            .ok_or(ConfigError::IncompleteTransition { field: "on" })?;
        let next = self
            .to
            .ok_or(ConfigError::IncompleteTransition { field: "to" })?;
        let direction = self
            .direction
            .ok_or(ConfigError::IncompleteTransition { field: "moves" })?;

        Ok(Transition {
            state,
            read,
            next,
            write: self.write.unwrap_or(read),
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::new().from("q0").on('1').build();

        assert_eq!(
            result,
            Err(ConfigError::IncompleteTransition { field: "to" })
        );
    }

    #[test]
    fn builder_requires_direction() {
        let result = TransitionBuilder::new().from("q0").on('1').to("q1").build();

        assert_eq!(
            result,
            Err(ConfigError::IncompleteTransition { field: "moves" })
        );
    }

    #[test]
    fn write_defaults_to_read_symbol() {
        let transition = TransitionBuilder::new()
            .from("q0")
            .on('1')
            .to("q1")
            .moves(Direction::Right)
            .build()
            .unwrap();

        assert_eq!(transition.write, '1');
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .from("q0")
            .on('_')
            .to("halt")
            .write('#')
            .moves(Direction::Left)
            .build()
            .unwrap();

        assert_eq!(
            transition,
            Transition::new("q0", '_', "halt", '#', Direction::Left)
        );
    }
}
