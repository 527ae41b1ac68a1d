//! Board representation.
//!
//! Contains the cell and coordinate types and the cross-shaped grid that
//! the engine mutates.

pub mod cell;
pub mod state;

pub use cell::{Cell, Coord};
pub use state::{Board, BOARD_SIZE, CENTER, INITIAL_PIECES};
