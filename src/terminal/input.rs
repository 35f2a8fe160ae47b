//! Reading human commands from a line-oriented source.

use crate::game::{BOARD_SIZE, Position};
use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, instrument};

/// One thing the human asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play at zero-based `(row, col)`. Not bounds-checked here; the session
    /// rejects positions off the board.
    Move(usize, usize),
    /// Abandon the round and start over.
    Restart,
    /// Leave the game.
    Quit,
    /// Input that matched nothing.
    Unrecognized(String),
}

/// Parses one line of input.
///
/// Accepts `row col` (1-based, space or comma separated), a keypad number
/// 1-9, a position label such as `center` or `top-left`, `restart` and
/// `quit`.
#[instrument]
pub fn parse_command(line: &str) -> Command {
    let text = line.trim();
    match text.to_lowercase().as_str() {
        "q" | "quit" | "exit" => return Command::Quit,
        "r" | "restart" | "new" => return Command::Restart,
        _ => {}
    }

    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        // 1-based on input; 0 maps past the board so the session reports it.
        return Command::Move(
            row.checked_sub(1).unwrap_or(BOARD_SIZE),
            col.checked_sub(1).unwrap_or(BOARD_SIZE),
        );
    }

    match Position::from_label_or_number(text) {
        Some(pos) => {
            let (row, col) = pos.to_coords();
            Command::Move(row, col)
        }
        None => Command::Unrecognized(text.to_string()),
    }
}

/// Somewhere human commands come from.
pub trait MoveSource {
    /// Returns the next command, or `None` when the source is exhausted.
    fn next_command(&mut self) -> Result<Option<Command>>;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// Commands read line by line from a reader, typically stdin.
pub struct LineSource<R> {
    name: String,
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    /// Creates a source over `reader`.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> MoveSource for LineSource<R> {
    fn next_command(&mut self) -> Result<Option<Command>> {
        self.line.clear();
        let read = self
            .reader
            .read_line(&mut self.line)
            .context("Failed to read move")?;
        if read == 0 {
            debug!(source = %self.name, "Input exhausted");
            return Ok(None);
        }
        Ok(Some(parse_command(&self.line)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_command("1 1"), Command::Move(0, 0));
        assert_eq!(parse_command(" 3,2 \n"), Command::Move(2, 1));
        assert_eq!(parse_command("4 4"), Command::Move(3, 3));
        assert_eq!(parse_command("0 1"), Command::Move(BOARD_SIZE, 0));
    }

    #[test]
    fn test_parse_keypad_and_label() {
        assert_eq!(parse_command("5"), Command::Move(1, 1));
        assert_eq!(parse_command("9"), Command::Move(2, 2));
        assert_eq!(parse_command("Top-right"), Command::Move(0, 2));
        assert_eq!(parse_command("bottom left"), Command::Move(2, 0));
    }

    #[test]
    fn test_parse_control_words() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("restart"), Command::Restart);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(
            parse_command("banana"),
            Command::Unrecognized("banana".to_string())
        );
        assert_eq!(parse_command(""), Command::Unrecognized(String::new()));
        assert_eq!(parse_command("top"), Command::Unrecognized("top".to_string()));
    }

    #[test]
    fn test_line_source_until_eof() {
        let mut source = LineSource::new("script", Cursor::new("5\nquit\n"));
        assert_eq!(source.next_command().unwrap(), Some(Command::Move(1, 1)));
        assert_eq!(source.next_command().unwrap(), Some(Command::Quit));
        assert_eq!(source.next_command().unwrap(), None);
        assert_eq!(source.name(), "script");
    }
}
