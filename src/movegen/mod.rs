//! Legal move generation.
//!
//! A jump moves a peg two cells along a row or column, over an adjacent peg,
//! into an empty hole. The jumped peg is removed.

use serde::Serialize;

use crate::board::{Board, Coord};

/// Jump offsets in testing order: up, down, left, right.
pub const DIRECTIONS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// A single jump: origin, the jumped-over cell, and the landing hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Jump {
    pub from: Coord,
    pub over: Coord,
    pub to: Coord,
}

/// Returns the cell between two coordinates that lie exactly two apart on
/// one axis, or None for any other pair.
pub fn midpoint(from: Coord, to: Coord) -> Option<Coord> {
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    if DIRECTIONS.contains(&(d_row, d_col)) {
        Some(from.offset(d_row / 2, d_col / 2))
    } else {
        None
    }
}

/// Returns whether `from -> to` is a legal jump on this board.
pub fn is_legal_jump(board: &Board, from: Coord, to: Coord) -> bool {
    if !board.has_piece(from) || !board.is_empty(to) {
        return false;
    }
    match midpoint(from, to) {
        Some(over) => board.has_piece(over),
        None => false,
    }
}

/// Generates all legal jumps for the peg at `from`, in direction order.
///
/// Returns an empty vec if `from` does not hold a peg.
pub fn legal_jumps(board: &Board, from: Coord) -> Vec<Jump> {
    if !board.has_piece(from) {
        return Vec::new();
    }

    let mut jumps = Vec::with_capacity(DIRECTIONS.len());
    for (d_row, d_col) in DIRECTIONS {
        let to = from.offset(d_row, d_col);
        let over = from.offset(d_row / 2, d_col / 2);
        if board.is_empty(to) && board.has_piece(over) {
            jumps.push(Jump { from, over, to });
        }
    }
    jumps
}

/// Returns the landing cells reachable from `from` in one jump.
pub fn legal_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    legal_jumps(board, from).into_iter().map(|j| j.to).collect()
}

/// Generates every legal jump on the board, origins in row-major order.
pub fn all_jumps(board: &Board) -> Vec<Jump> {
    board
        .pieces()
        .flat_map(|from| legal_jumps(board, from))
        .collect()
}

/// Returns whether any peg on the board can jump. Stops at the first hit.
pub fn has_any_jump(board: &Board) -> bool {
    board.pieces().any(|from| {
        DIRECTIONS.iter().any(|&(d_row, d_col)| {
            board.is_empty(from.offset(d_row, d_col))
                && board.has_piece(from.offset(d_row / 2, d_col / 2))
        })
    })
}
