//! Cell states and board coordinates.
//!
//! A cell is either outside the cross (inert), holding a peg, or an empty
//! hole. Coordinates are signed so that off-board targets produced by jump
//! arithmetic can be represented and rejected by validity checks.

use serde::Serialize;

/// The state of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Outside the cross shape; never holds a peg or a hole.
    OutOfPlay,
    /// Holds a peg.
    Occupied,
    /// A hole that can receive a peg.
    Empty,
}

impl Cell {
    /// Returns the single-character board notation for this cell.
    pub const fn notation_char(self) -> char {
        match self {
            Cell::OutOfPlay => 'x',
            Cell::Occupied => 'o',
            Cell::Empty => '.',
        }
    }

    /// Parses a cell from its single-character board notation.
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            'x' => Some(Cell::OutOfPlay),
            'o' => Some(Cell::Occupied),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Returns true for cells that belong to the cross.
    pub const fn in_play(self) -> bool {
        !matches!(self, Cell::OutOfPlay)
    }
}

/// A (row, column) position. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Returns this coordinate shifted by the given row/column deltas.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Coord {
        Coord {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
