//! Board notation encoding and decoding.
//!
//! A board is written as seven rows separated by '/', each row exactly seven
//! characters: 'x' for out-of-play, 'o' for a peg, '.' for a hole. The
//! starting board is [`INITIAL_NOTATION`].
//!
//! Only the classic cross is accepted; the out-of-play cells must match it.

use crate::board::{Board, Cell, BOARD_SIZE};

/// Notation of the starting board.
pub const INITIAL_NOTATION: &str = "xxoooxx/xxoooxx/ooooooo/ooo.ooo/ooooooo/xxoooxx/xxoooxx";

/// Errors that can occur while parsing board notation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 7 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell character '{ch}' in row {row}")]
    InvalidCell { row: usize, ch: char },

    #[error("cell {row},{col} does not match the cross shape")]
    ShapeMismatch { row: i32, col: i32 },
}

/// Parses a single row of notation.
fn parse_row(row: usize, s: &str) -> Result<[Cell; BOARD_SIZE], NotationError> {
    let len = s.chars().count();
    if len != BOARD_SIZE {
        return Err(NotationError::WrongRowLength { row, len });
    }

    let mut cells = [Cell::OutOfPlay; BOARD_SIZE];
    for (slot, ch) in cells.iter_mut().zip(s.chars()) {
        *slot = Cell::from_notation_char(ch).ok_or(NotationError::InvalidCell { row, ch })?;
    }
    Ok(cells)
}

/// Parses board notation into a [`Board`].
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let rows: Vec<&str> = s.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    let mut cells = [[Cell::OutOfPlay; BOARD_SIZE]; BOARD_SIZE];
    for (i, row) in rows.iter().enumerate() {
        cells[i] = parse_row(i, row)?;
    }

    Board::from_rows(cells).map_err(|at| NotationError::ShapeMismatch {
        row: at.row,
        col: at.col,
    })
}

/// Encodes a board into canonical notation.
pub fn encode_board(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
    for (i, row) in board.rows().iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.extend(row.iter().map(|c| c.notation_char()));
    }
    out
}
