//! Tape symbols and head movement.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tape symbol.
///
/// Symbols are single characters; the alphabet a machine accepts is
/// whatever its definition declares.
pub type Symbol = char;

/// Blank symbol used when a description does not name one.
pub const DEFAULT_BLANK: Symbol = '_';

/// Direction the head moves after a write.
///
/// Serialized as the single letters `L`, `R` and `S`. `N` ("no move")
/// is accepted as an alias of `S` when reading descriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "S", alias = "N")]
    Stay,
}

impl Direction {
    /// Offset applied to the head position.
    pub fn offset(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Stay => 0,
        }
    }

    /// Single-letter code used in descriptions and diagrams.
    pub fn code(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Stay => 'S',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_direction() {
        assert_eq!(Direction::Left.offset(), -1);
        assert_eq!(Direction::Right.offset(), 1);
        assert_eq!(Direction::Stay.offset(), 0);
    }

    #[test]
    fn direction_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Direction::Left).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Direction::Right).unwrap(), "\"R\"");
        assert_eq!(serde_json::to_string(&Direction::Stay).unwrap(), "\"S\"");
    }

    #[test]
    fn no_move_alias_reads_as_stay() {
        let direction: Direction = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(direction, Direction::Stay);
    }

    #[test]
    fn unknown_letter_is_rejected() {
        assert!(serde_json::from_str::<Direction>("\"X\"").is_err());
    }
}
