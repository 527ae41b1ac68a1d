//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the session loop can dispatch on.

use tracing::warn;

/// A parsed driver-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the engine must reply `readyok`.
    IsReady,

    /// Restore the starting board (`newgame` or `reset`).
    NewGame,

    /// Load a board from notation.
    Position { notation: String },

    /// Select the peg at a coordinate.
    Select { row: i32, col: i32 },

    /// Jump the selected peg to a coordinate.
    Move { row: i32, col: i32 },

    /// Interpret a click at a coordinate (move, select or clear).
    Click { row: i32, col: i32 },

    /// Drop the current selection.
    Clear,

    /// Report the full engine state.
    State,

    /// Set a session option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Terminate the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newgame" | "reset" => Some(Command::NewGame),
        "clear" => Some(Command::Clear),
        "state" => Some(Command::State),
        "quit" => Some(Command::Quit),

        "position" => parse_position(&tokens),
        "select" => parse_coord(&tokens).map(|(row, col)| Command::Select { row, col }),
        "move" => parse_coord(&tokens).map(|(row, col)| Command::Move { row, col }),
        "click" => parse_coord(&tokens).map(|(row, col)| Command::Click { row, col }),
        "setoption" => parse_setoption(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `<cmd> <row> <col>`.
fn parse_coord(tokens: &[&str]) -> Option<(i32, i32)> {
    if tokens.len() != 3 {
        warn!("malformed {}: expected '{} <row> <col>'", tokens[0], tokens[0]);
        return None;
    }
    match (tokens[1].parse::<i32>(), tokens[2].parse::<i32>()) {
        (Ok(row), Ok(col)) => Some((row, col)),
        _ => {
            warn!("invalid coordinate: '{} {}'", tokens[1], tokens[2]);
            None
        }
    }
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    // Notation is a single token (no spaces) following "position"
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("reset"), Some(Command::NewGame));
        assert_eq!(parse_command("clear"), Some(Command::Clear));
        assert_eq!(parse_command("state"), Some(Command::State));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("  "), None);
        assert_eq!(parse_command("\t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("jump 1 2"), None);
    }

    #[test]
    fn parse_coordinate_commands() {
        assert_eq!(parse_command("select 3 1"), Some(Command::Select { row: 3, col: 1 }));
        assert_eq!(parse_command("move 3 3"), Some(Command::Move { row: 3, col: 3 }));
        assert_eq!(parse_command("click 0 4"), Some(Command::Click { row: 0, col: 4 }));
    }

    #[test]
    fn negative_and_out_of_range_coordinates_still_parse() {
        assert_eq!(parse_command("select -1 9"), Some(Command::Select { row: -1, col: 9 }));
    }

    #[test]
    fn malformed_coordinates_return_none() {
        assert_eq!(parse_command("select"), None);
        assert_eq!(parse_command("select 3"), None);
        assert_eq!(parse_command("move 3 3 3"), None);
        assert_eq!(parse_command("click a b"), None);
        assert_eq!(parse_command("move 3 99999999999"), None);
    }

    #[test]
    fn parse_position_notation() {
        let notation = "xxoooxx/xxoooxx/ooooooo/ooo.ooo/ooooooo/xxoooxx/xxoooxx";
        let cmd = parse_command(&format!("position {}", notation)).unwrap();
        assert_eq!(
            cmd,
            Command::Position {
                notation: notation.to_string(),
            }
        );
        assert_eq!(parse_command("position"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        let cmd = parse_command("setoption name StateFormat value json").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "StateFormat".to_string(),
                value: Some("json".to_string()),
            }
        );
    }

    #[test]
    fn parse_setoption_no_value() {
        let cmd = parse_command("setoption name AnnounceEnd").unwrap();
        assert_eq!(
            cmd,
            Command::SetOption {
                name: "AnnounceEnd".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn parse_setoption_malformed_returns_none() {
        assert_eq!(parse_command("setoption"), None);
        assert_eq!(parse_command("setoption foo"), None);
        assert_eq!(parse_command("setoption name value x"), None);
    }

    #[test]
    fn parse_with_leading_trailing_whitespace() {
        assert_eq!(parse_command("  isready  "), Some(Command::IsReady));
        assert_eq!(parse_command("\tselect  2   3 "), Some(Command::Select { row: 2, col: 3 }));
    }
}
