//! Board representation.
//!
//! Holds the fixed 7x7 grid of cells. The playable region is the classic
//! cross: the four 2x2 corner blocks are permanently out of play.

use super::cell::{Cell, Coord};

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 7;

/// Number of pegs on the starting board.
pub const INITIAL_PIECES: u32 = 32;

/// The hole at the centre of the starting board.
pub const CENTER: Coord = Coord::new(3, 3);

/// Returns whether an in-bounds position belongs to the cross shape.
const fn in_cross(row: usize, col: usize) -> bool {
    let row_arm = row >= 2 && row <= 4;
    let col_arm = col >= 2 && col <= 4;
    row_arm || col_arm
}

/// Converts a signed coordinate to grid indices, or None if off the grid.
fn index(coord: Coord) -> Option<(usize, usize)> {
    let size = BOARD_SIZE as i32;
    if coord.row < 0 || coord.row >= size || coord.col < 0 || coord.col >= size {
        return None;
    }
    Some((coord.row as usize, coord.col as usize))
}

/// A complete grid of cell states.
///
/// Plain fixed-size array, so the board is `Copy` and a snapshot of it is
/// always a deep copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting board: every cross cell holds a peg except the centre.
    pub fn initial() -> Self {
        let mut board = Board::filled(Cell::Occupied);
        board.cells[CENTER.row as usize][CENTER.col as usize] = Cell::Empty;
        board
    }

    /// Creates a cross-shaped board with every playable cell set to `fill`.
    ///
    /// Passing `Cell::OutOfPlay` yields an all-empty cross.
    pub fn filled(fill: Cell) -> Self {
        let fill = if fill.in_play() { fill } else { Cell::Empty };
        let mut cells = [[Cell::OutOfPlay; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if in_cross(r, c) {
                    *cell = fill;
                }
            }
        }
        Board { cells }
    }

    /// Builds a board from raw rows.
    ///
    /// Fails with the first coordinate whose out-of-play status does not
    /// match the cross shape.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, Coord> {
        let board = Board { cells };
        match board.shape_mismatch() {
            Some(at) => Err(at),
            None => Ok(board),
        }
    }

    /// Returns the first position whose out-of-play status disagrees with
    /// the cross shape, if any.
    fn shape_mismatch(&self) -> Option<Coord> {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.in_play() != in_cross(r, c) {
                    return Some(Coord::new(r as i32, c as i32));
                }
            }
        }
        None
    }

    /// Returns the cell at a coordinate, or None if it lies off the grid.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        index(coord).map(|(r, c)| self.cells[r][c])
    }

    /// True iff the coordinate is on the grid and inside the cross.
    pub fn valid(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(cell) if cell.in_play())
    }

    /// True iff the coordinate is valid and holds a peg.
    pub fn has_piece(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Occupied)
    }

    /// True iff the coordinate is valid and is an empty hole.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// Sets a playable cell to a peg or a hole.
    ///
    /// Returns false (and leaves the board untouched) for invalid coordinates
    /// or when asked to write `Cell::OutOfPlay`.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if !self.valid(coord) || !cell.in_play() {
            return false;
        }
        if let Some((r, c)) = index(coord) {
            self.cells[r][c] = cell;
        }
        true
    }

    /// Counts the pegs on the board.
    pub fn piece_count(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied)
            .count() as u32
    }

    /// Returns the raw grid, row-major.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over every coordinate of the grid in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |r| (0..size).map(move |c| Coord::new(r, c)))
    }

    /// Iterates over the coordinates currently holding a peg.
    pub fn pieces(&self) -> impl Iterator<Item = Coord> + '_ {
        Board::coords().filter(move |&c| self.has_piece(c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
