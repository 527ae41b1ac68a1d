//! Engine state management.
//!
//! Holds the board, the peg counter, the current selection and the legal
//! destinations for that selection. Every command reports acceptance or
//! rejection through its return value; a rejected command never changes state.

use serde::Serialize;
use tracing::{debug, trace};

use crate::board::{Board, Cell, Coord, BOARD_SIZE, INITIAL_PIECES};
use crate::movegen::{has_any_jump, legal_destinations, midpoint};

/// Result of a click-style interaction (see [`Engine::click`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickOutcome {
    /// The click landed on a legal destination and the jump was played.
    Moved,
    /// The click picked up a peg.
    Selected,
    /// The click hit nothing useful and the selection was dropped.
    Cleared,
}

/// Immutable copy of the engine state for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub remaining: u32,
    pub selection: Option<Coord>,
    pub legal_moves: Vec<Coord>,
    pub game_over: bool,
    pub won: bool,
}

/// The peg-solitaire board engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    remaining: u32,
    selection: Option<Coord>,
    legal_moves: Vec<Coord>,
}

impl Engine {
    /// Creates an engine on the starting cross with 32 pegs.
    pub fn new() -> Self {
        Engine {
            board: Board::initial(),
            remaining: INITIAL_PIECES,
            selection: None,
            legal_moves: Vec::new(),
        }
    }

    /// Creates an engine on an arbitrary cross-shaped board.
    pub fn from_board(board: Board) -> Self {
        let mut engine = Engine::new();
        engine.set_board(board);
        engine
    }

    /// Replaces the board. The counter is recounted from the grid and the
    /// selection is cleared.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.remaining = board.piece_count();
        self.clear_selection();
        debug!(remaining = self.remaining, "board loaded");
        self.debug_check();
    }

    /// Restores the starting position.
    pub fn reset(&mut self) {
        self.board = Board::initial();
        self.remaining = INITIAL_PIECES;
        self.clear_selection();
        debug!("board reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of pegs left on the board.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// Destinations reachable from the selected peg, in direction order.
    pub fn legal_moves(&self) -> &[Coord] {
        &self.legal_moves
    }

    pub fn valid(&self, row: i32, col: i32) -> bool {
        self.board.valid(Coord::new(row, col))
    }

    pub fn has_piece(&self, row: i32, col: i32) -> bool {
        self.board.has_piece(Coord::new(row, col))
    }

    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.board.is_empty(Coord::new(row, col))
    }

    /// Selects the peg at (row, col) and computes its legal destinations.
    ///
    /// Returns false without touching the state if there is no peg there.
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        let coord = Coord::new(row, col);
        if !self.board.has_piece(coord) {
            trace!(%coord, "select rejected: no piece");
            return false;
        }
        self.selection = Some(coord);
        self.legal_moves = legal_destinations(&self.board, coord);
        trace!(%coord, legal = self.legal_moves.len(), "piece selected");
        true
    }

    /// Whether (row, col) is a legal destination for the current selection.
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        self.legal_moves.contains(&Coord::new(row, col))
    }

    /// Jumps the selected peg to (row, col), removing the jumped peg.
    ///
    /// Returns false without touching the state if nothing is selected or the
    /// destination is not legal.
    pub fn move_piece(&mut self, row: i32, col: i32) -> bool {
        let to = Coord::new(row, col);
        let from = match self.selection {
            Some(from) => from,
            None => {
                trace!(%to, "move rejected: no selection");
                return false;
            }
        };
        if !self.is_legal_move(row, col) {
            trace!(%from, %to, "move rejected: illegal destination");
            return false;
        }
        // Legal destinations are always two cells away on one axis.
        let over = match midpoint(from, to) {
            Some(over) => over,
            None => return false,
        };

        self.board.set(from, Cell::Empty);
        self.board.set(over, Cell::Empty);
        self.board.set(to, Cell::Occupied);
        self.remaining -= 1;
        self.clear_selection();

        debug!(%from, %over, %to, remaining = self.remaining, "jump played");
        self.debug_check();
        true
    }

    /// Drops the selection and its legal destinations.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_moves.clear();
    }

    /// Applies a click the way a board UI would: play the jump if the click
    /// is a legal destination, otherwise pick up the peg under it, otherwise
    /// drop the selection.
    pub fn click(&mut self, row: i32, col: i32) -> ClickOutcome {
        if self.selection.is_some() && self.is_legal_move(row, col) && self.move_piece(row, col) {
            return ClickOutcome::Moved;
        }
        if self.select(row, col) {
            return ClickOutcome::Selected;
        }
        self.clear_selection();
        ClickOutcome::Cleared
    }

    /// True iff no peg on the board has a legal jump. Recomputed on every call.
    pub fn is_game_over(&self) -> bool {
        !has_any_jump(&self.board)
    }

    /// True iff exactly one peg remains.
    pub fn has_won(&self) -> bool {
        self.remaining == 1
    }

    /// Returns a deep copy of the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: *self.board.rows(),
            remaining: self.remaining,
            selection: self.selection,
            legal_moves: self.legal_moves.clone(),
            game_over: self.is_game_over(),
            won: self.has_won(),
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.remaining, self.board.piece_count());
        debug_assert!(self.remaining != 1 || self.is_game_over());
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;

    #[test]
    fn new_engine_is_at_start() {
        let engine = Engine::new();
        assert_eq!(engine.remaining(), 32);
        assert_eq!(engine.selection(), None);
        assert!(engine.legal_moves().is_empty());
        assert_eq!(*engine.board(), Board::initial());
    }

    #[test]
    fn select_center_neighbour_offers_center() {
        let mut engine = Engine::new();
        assert!(engine.select(3, 1));
        assert_eq!(engine.selection(), Some(Coord::new(3, 1)));
        assert_eq!(engine.legal_moves(), &[CENTER]);
        assert!(engine.is_legal_move(3, 3));
        assert!(!engine.is_legal_move(3, 2));
    }

    #[test]
    fn select_hole_or_corner_is_rejected() {
        let mut engine = Engine::new();
        engine.select(3, 1);
        let before = engine.clone();
        assert!(!engine.select(3, 3));
        assert!(!engine.select(0, 0));
        assert!(!engine.select(-1, 8));
        assert_eq!(engine, before);
    }

    #[test]
    fn reselect_replaces_legal_moves() {
        let mut engine = Engine::new();
        assert!(engine.select(3, 1));
        assert!(engine.select(0, 3));
        assert_eq!(engine.selection(), Some(Coord::new(0, 3)));
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn move_without_selection_is_rejected() {
        let mut engine = Engine::new();
        assert!(!engine.move_piece(3, 3));
        assert_eq!(engine, Engine::new());
    }

    #[test]
    fn illegal_move_keeps_selection() {
        let mut engine = Engine::new();
        engine.select(3, 1);
        assert!(!engine.move_piece(3, 2));
        assert!(!engine.move_piece(1, 1));
        assert_eq!(engine.selection(), Some(Coord::new(3, 1)));
        assert_eq!(engine.remaining(), 32);
    }

    #[test]
    fn move_jumps_and_removes_midpoint() {
        let mut engine = Engine::new();
        assert!(engine.select(3, 1));
        assert!(engine.move_piece(3, 3));
        assert_eq!(engine.remaining(), 31);
        assert!(engine.is_empty(3, 1));
        assert!(engine.is_empty(3, 2));
        assert!(engine.has_piece(3, 3));
        assert_eq!(engine.selection(), None);
        assert!(engine.legal_moves().is_empty());
    }

    #[test]
    fn click_moves_selects_and_clears() {
        let mut engine = Engine::new();
        assert_eq!(engine.click(3, 3), ClickOutcome::Cleared);
        assert_eq!(engine.click(3, 5), ClickOutcome::Selected);
        assert_eq!(engine.click(3, 3), ClickOutcome::Moved);
        assert_eq!(engine.remaining(), 31);

        assert_eq!(engine.click(1, 3), ClickOutcome::Selected);
        assert_eq!(engine.click(0, 0), ClickOutcome::Cleared);
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn click_on_other_piece_switches_selection() {
        let mut engine = Engine::new();
        engine.click(3, 1);
        assert_eq!(engine.click(5, 3), ClickOutcome::Selected);
        assert_eq!(engine.selection(), Some(Coord::new(5, 3)));
        assert_eq!(engine.legal_moves(), &[CENTER]);
    }

    #[test]
    fn set_board_recounts_pieces() {
        let mut board = Board::filled(Cell::Empty);
        board.set(Coord::new(2, 2), Cell::Occupied);
        board.set(Coord::new(2, 3), Cell::Occupied);
        let mut engine = Engine::new();
        engine.select(3, 1);
        engine.set_board(board);
        assert_eq!(engine.remaining(), 2);
        assert_eq!(engine.selection(), None);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn snapshot_is_detached() {
        let mut engine = Engine::new();
        engine.select(1, 3);
        let mut snap = engine.snapshot();
        snap.grid[3][3] = Cell::Occupied;
        snap.legal_moves.clear();
        assert!(engine.is_empty(3, 3));
        assert_eq!(engine.legal_moves(), &[CENTER]);
    }

    #[test]
    fn snapshot_reports_state() {
        let mut engine = Engine::new();
        engine.select(5, 3);
        let snap = engine.snapshot();
        assert_eq!(snap.remaining, 32);
        assert_eq!(snap.selection, Some(Coord::new(5, 3)));
        assert_eq!(snap.legal_moves, vec![CENTER]);
        assert!(!snap.game_over);
        assert!(!snap.won);
        assert_eq!(snap.grid, *Board::initial().rows());
    }

    #[test]
    fn lone_peg_wins_and_ends_game() {
        let mut board = Board::filled(Cell::Empty);
        board.set(Coord::new(3, 3), Cell::Occupied);
        board.set(Coord::new(3, 4), Cell::Occupied);
        let mut engine = Engine::from_board(board);
        assert!(!engine.is_game_over());
        assert!(!engine.has_won());

        assert!(engine.select(3, 3));
        assert!(engine.move_piece(3, 5));
        assert!(engine.is_game_over());
        assert!(engine.has_won());
    }
}
