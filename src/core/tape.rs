//! Unbounded single tape with a movable head.
//!
//! The tape is backed by a finite buffer that grows in fixed chunks
//! whenever the head reads or writes outside the allocated cells.
//! Positions handed out by the tape are *logical*: position 0 is the
//! first input cell, negative positions lie to its left. Growing to the
//! left re-bases the buffer, but logical positions never change, so a
//! position recorded before a growth still names the same cell after it.

use super::symbol::{Direction, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter;
use tracing::trace;

/// Blank cells padded on each side of the input when a tape is built.
pub const MARGIN: usize = 10;

/// Blank cells added per growth when the head leaves the buffer.
pub const GROWTH_CHUNK: usize = 10;

/// Cells shown on each side of the head by the `Display` impl.
const DISPLAY_RADIUS: isize = 20;

/// A logically infinite tape.
///
/// # Example
///
/// ```rust
/// use turing_fib::core::{Direction, Tape};
///
/// let mut tape = Tape::new("11", '_');
/// assert_eq!(tape.read(), '1');
///
/// tape.move_head(Direction::Left);
/// tape.write('#');
/// assert_eq!(tape.head_position(), -1);
/// assert_eq!(tape.content(), "#11");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<Symbol>,
    /// Buffer index of the head. May sit outside the buffer between a
    /// move and the next read or write.
    head: isize,
    /// Buffer index of logical position 0.
    origin: usize,
    blank: Symbol,
}

impl Tape {
    /// Build a tape holding `input`, padded with `MARGIN` blanks on both
    /// sides, with the head on the first input cell.
    ///
    /// An empty input is stored as a single blank cell.
    pub fn new(input: &str, blank: Symbol) -> Self {
        let mut content: Vec<Symbol> = input.chars().collect();
        if content.is_empty() {
            content.push(blank);
        }

        let mut cells = Vec::with_capacity(content.len() + 2 * MARGIN);
        cells.extend(iter::repeat_n(blank, MARGIN));
        cells.extend(content);
        cells.extend(iter::repeat_n(blank, MARGIN));

        Self {
            cells,
            head: MARGIN as isize,
            origin: MARGIN,
            blank,
        }
    }

    pub fn blank(&self) -> Symbol {
        self.blank
    }

    /// Logical position of the head.
    pub fn head_position(&self) -> isize {
        self.head - self.origin as isize
    }

    /// Logical range `[lower, upper)` currently backed by storage.
    pub fn bounds(&self) -> (isize, isize) {
        let lower = -(self.origin as isize);
        (lower, lower + self.cells.len() as isize)
    }

    /// Number of allocated cells.
    pub fn allocated(&self) -> usize {
        self.cells.len()
    }

    /// Raw buffer contents, margins included.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Read the symbol under the head, growing the buffer first if the
    /// head is outside it.
    pub fn read(&mut self) -> Symbol {
        let index = self.ensure_head_in_bounds();
        self.cells[index]
    }

    /// Overwrite the cell under the head, growing the buffer first if
    /// the head is outside it.
    pub fn write(&mut self, symbol: Symbol) {
        let index = self.ensure_head_in_bounds();
        self.cells[index] = symbol;
    }

    /// Move the head one cell. Growth is deferred to the next access.
    pub fn move_head(&mut self, direction: Direction) {
        self.head += direction.offset();
    }

    /// Place the head at an arbitrary logical position. Growth is
    /// deferred to the next access.
    pub fn seek(&mut self, position: isize) {
        self.head = position + self.origin as isize;
    }

    /// Symbol under the head without growing the buffer. Cells outside
    /// the buffer read as blank.
    pub fn peek(&self) -> Symbol {
        self.cell(self.head)
    }

    /// Symbol at a logical position without growing the buffer.
    pub fn symbol_at(&self, position: isize) -> Symbol {
        self.cell(position + self.origin as isize)
    }

    /// Tape contents with blanks trimmed from both ends.
    ///
    /// Interior blanks are kept. A fully blank tape yields a single
    /// blank symbol, never an empty string.
    pub fn content(&self) -> String {
        let blank = self.blank;
        let start = self.cells.iter().position(|&c| c != blank);
        let end = self.cells.iter().rposition(|&c| c != blank);

        match (start, end) {
            (Some(start), Some(end)) => self.cells[start..=end].iter().collect(),
            _ => blank.to_string(),
        }
    }

    /// Buffer index of logical position 0.
    pub(crate) fn origin(&self) -> usize {
        self.origin
    }

    fn cell(&self, index: isize) -> Symbol {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(self.blank)
    }

    fn ensure_head_in_bounds(&mut self) -> usize {
        if self.head < 0 {
            self.grow_left(chunks_to_cover(self.head.unsigned_abs()));
        }
        let allocated = self.cells.len() as isize;
        if self.head >= allocated {
            self.grow_right(chunks_to_cover((self.head - allocated) as usize + 1));
        }
        self.head as usize
    }

    fn grow_left(&mut self, chunks: usize) {
        let added = chunks * GROWTH_CHUNK;
        self.cells.splice(0..0, iter::repeat_n(self.blank, added));
        self.head += added as isize;
        self.origin += added;
        trace!(chunks, allocated = self.cells.len(), "tape grew left");
    }

    fn grow_right(&mut self, chunks: usize) {
        let added = chunks * GROWTH_CHUNK;
        self.cells.extend(iter::repeat_n(self.blank, added));
        trace!(chunks, allocated = self.cells.len(), "tape grew right");
    }
}

/// Whole growth chunks needed to add at least `cells` cells.
fn chunks_to_cover(cells: usize) -> usize {
    cells.div_ceil(GROWTH_CHUNK)
}

impl fmt::Display for Tape {
    /// Renders a window around the head with a caret under it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window: String = (self.head - DISPLAY_RADIUS..self.head + DISPLAY_RADIUS)
            .map(|index| self.cell(index))
            .collect();
        let caret = " ".repeat(DISPLAY_RADIUS as usize);
        write!(f, "{window}\n{caret}^")
    }
}
