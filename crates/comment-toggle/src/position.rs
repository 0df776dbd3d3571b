//! Text coordinates.
//!
//! All coordinates are **1-based**: the first character of the first line is
//! `Position::new(1, 1)`. Columns count characters (Unicode scalar values), and the column
//! one past the last character addresses the end of the line.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// One-based line number.
    pub line: usize,
    /// One-based column in characters within the line.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A range between two positions, always stored with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a range; the endpoints are swapped if given in reverse order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// An empty range at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the range covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (anchor before active)
    Forward,
    /// Backward selection (active before anchor)
    Backward,
}

/// A range with an anchor (where the selection started) and an active end (the cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection was started.
    pub anchor: Position,
    /// Where the cursor is.
    pub active: Position,
}

impl Selection {
    /// Create a selection from `anchor` to `active`.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A plain cursor at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// The covered range, normalized so that `start <= end`.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Returns `true` if anchor and active end coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Direction of the selection; collapsed selections count as forward.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.active {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }
}

impl From<Range> for Selection {
    fn from(range: Range) -> Self {
        Self::new(range.start, range.end)
    }
}
