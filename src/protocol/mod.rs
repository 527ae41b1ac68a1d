//! Text protocol handling.
//!
//! This module implements the line-oriented surface a presentation layer
//! uses to drive the engine: board notation, the command parser, and the
//! session that dispatches commands and writes replies.

pub mod notation;
pub mod parser;
pub mod session;

pub use notation::{encode_board, parse_board, NotationError, INITIAL_NOTATION};
pub use parser::{parse_command, Command};
pub use session::{Session, StateFormat};
