//! Protocol session.
//!
//! Owns the engine and the session options between commands, and writes the
//! protocol replies for each command to an output sink.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::Coord;
use crate::engine::{ClickOutcome, Engine};
use crate::protocol::notation::{encode_board, parse_board, NotationError};

/// Option name selecting the `state` reply format (`text` or `json`).
pub const OPT_STATE_FORMAT: &str = "StateFormat";

/// Option name toggling the `gameover` line after a finishing move.
pub const OPT_ANNOUNCE_END: &str = "AnnounceEnd";

/// Reply format for the `state` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    Text,
    Json,
}

/// Holds the engine and session options between commands.
pub struct Session {
    pub engine: Engine,
    pub options: HashMap<String, String>,
}

/// Formats a list of coordinates as `r,c r,c ...`, or `-` when empty.
fn format_coords(coords: &[Coord]) -> String {
    if coords.is_empty() {
        return "-".to_string();
    }
    coords
        .iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Session {
    /// Creates a session on the starting board with default options.
    pub fn new() -> Self {
        Session {
            engine: Engine::new(),
            options: HashMap::new(),
        }
    }

    /// Sets a session option. A missing value stores the empty string.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured `state` format, defaulting to text.
    pub fn state_format(&self) -> StateFormat {
        match self.options.get(OPT_STATE_FORMAT).map(|v| v.to_ascii_lowercase()) {
            Some(v) if v == "json" => StateFormat::Json,
            _ => StateFormat::Text,
        }
    }

    /// Returns whether finishing moves are followed by a `gameover` line.
    pub fn announce_end(&self) -> bool {
        self.options
            .get(OPT_ANNOUNCE_END)
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true)
    }

    /// Restores the starting board.
    pub fn new_game(&mut self) {
        self.engine.reset();
    }

    /// Loads a board from notation.
    pub fn set_position(&mut self, notation: &str) -> Result<(), NotationError> {
        let board = parse_board(notation)?;
        self.engine.set_board(board);
        Ok(())
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `select <r> <c>`: replies `selected` plus the legal
    /// destinations, or `rejected select`.
    pub fn handle_select<W: Write>(&mut self, row: i32, col: i32, out: &mut W) -> io::Result<()> {
        if self.engine.select(row, col) {
            self.write_selected(row, col, out)?;
        } else {
            writeln!(out, "rejected select {} {}", row, col)?;
        }
        out.flush()
    }

    /// Handles `move <r> <c>`: replies `moved` (and possibly `gameover`),
    /// or `rejected move`.
    pub fn handle_move<W: Write>(&mut self, row: i32, col: i32, out: &mut W) -> io::Result<()> {
        if self.engine.move_piece(row, col) {
            self.write_moved(row, col, out)?;
        } else {
            writeln!(out, "rejected move {} {}", row, col)?;
        }
        out.flush()
    }

    /// Handles `click <r> <c>`, replying as the resulting action would.
    pub fn handle_click<W: Write>(&mut self, row: i32, col: i32, out: &mut W) -> io::Result<()> {
        match self.engine.click(row, col) {
            ClickOutcome::Moved => self.write_moved(row, col, out)?,
            ClickOutcome::Selected => self.write_selected(row, col, out)?,
            ClickOutcome::Cleared => writeln!(out, "cleared")?,
        }
        out.flush()
    }

    /// Handles `clear`.
    pub fn handle_clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.engine.clear_selection();
        writeln!(out, "cleared")?;
        out.flush()
    }

    /// Handles `state`, in the configured format.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snap = self.engine.snapshot();
        match self.state_format() {
            StateFormat::Json => {
                write!(out, "state ")?;
                serde_json::to_writer(&mut *out, &snap)?;
                writeln!(out)?;
            }
            StateFormat::Text => {
                writeln!(out, "board {}", encode_board(self.engine.board()))?;
                writeln!(out, "remaining {}", snap.remaining)?;
                match snap.selection {
                    Some(c) => writeln!(out, "selection {} {}", c.row, c.col)?,
                    None => writeln!(out, "selection none")?,
                }
                writeln!(out, "legal {}", format_coords(&snap.legal_moves))?;
                writeln!(out, "gameover {}", snap.game_over)?;
                writeln!(out, "won {}", snap.won)?;
                writeln!(out, "stateok")?;
            }
        }
        out.flush()
    }

    fn write_selected<W: Write>(&self, row: i32, col: i32, out: &mut W) -> io::Result<()> {
        writeln!(out, "selected {} {}", row, col)?;
        writeln!(out, "legal {}", format_coords(self.engine.legal_moves()))
    }

    fn write_moved<W: Write>(&self, row: i32, col: i32, out: &mut W) -> io::Result<()> {
        writeln!(out, "moved {} {}", row, col)?;
        if self.announce_end() && self.engine.is_game_over() {
            let verdict = if self.engine.has_won() { "won" } else { "lost" };
            writeln!(out, "gameover {}", verdict)?;
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
