//! Human contestant reading moves from a text stream.

use super::Contestant;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strictly_minimax::{Action, Board, apply};
use tracing::debug;

/// Human player typing `row col` (0-2 each) or a square number 1-9.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and prompt streams.
    pub fn new(name: impl Into<String>, input: R, prompt: W) -> Self {
        Self {
            name: name.into(),
            input,
            prompt,
        }
    }
}

/// Parses `row col`, `row,col` or a 1-based square number.
pub fn parse_action(line: &str) -> Option<Action> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [square] => {
            let square: usize = square.parse().ok()?;
            Action::from_index(square.checked_sub(1)?)
        }
        [row, col] => Some(Action::new(row.parse().ok()?, col.parse().ok()?)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Contestant for HumanPlayer<R, W> {
    fn choose(&mut self, board: &Board) -> Result<Action> {
        loop {
            write!(self.prompt, "{}, your move (row col or 1-9): ", self.name)?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            let Some(action) = parse_action(&line) else {
                writeln!(self.prompt, "Could not read '{}'", line.trim())?;
                continue;
            };

            // The rules engine is the validator; its errors become the re-prompt.
            match apply(board, action) {
                Ok(_) => return Ok(action),
                Err(e) => {
                    debug!(%e, "Rejected human move");
                    writeln!(self.prompt, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
