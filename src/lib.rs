//! Resta Um (peg solitaire) engine library.
//!
//! Exposes the board representation, jump generation, the board engine, and
//! the text protocol used by the binary entry point.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod protocol;

pub use board::{Board, Cell, Coord};
pub use engine::{ClickOutcome, Engine, Snapshot};
