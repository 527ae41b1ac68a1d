//! Restaum -- a peg-solitaire engine driven over a line protocol.
//!
//! This binary reads commands from stdin and writes replies to stdout.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::io::{self, BufRead};

use tracing::warn;
use tracing_subscriber::EnvFilter;

use restaum::protocol::parser::{parse_command, Command};
use restaum::protocol::session::Session;

/// Runs the main protocol loop, reading commands from stdin and writing
/// replies to stdout.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => session.handle_isready(&mut out)?,
            Command::NewGame => session.new_game(),
            Command::Position { notation } => {
                if let Err(e) = session.set_position(&notation) {
                    warn!("failed to parse board notation: {}", e);
                }
            }
            Command::Select { row, col } => session.handle_select(row, col, &mut out)?,
            Command::Move { row, col } => session.handle_move(row, col, &mut out)?,
            Command::Click { row, col } => session.handle_click(row, col, &mut out)?,
            Command::Clear => session.handle_clear(&mut out)?,
            Command::State => session.handle_state(&mut out)?,
            Command::SetOption { name, value } => session.set_option(name, value),
            Command::Quit => break,
        }
    }

    Ok(())
}
