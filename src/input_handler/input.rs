//! Move input parsing.

use std::io::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        (\d+)                    # column
        (?:\s*,\s*|\s+)
        (\d+)                    # row
        (?:(?:\s*,\s*|\s+)(\d+))? # piece size, stacking only
        $
        ",
    )
    .expect("MOVE_RE regex should be valid")
});
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}, expected `<col> <row>` or `<col> <row> <size>`")]
    InvalidInput { input: String },
}

/// A parsed line of player input. Numbers are only checked for shape here;
/// whether they name a real cell or an available piece is decided when the
/// move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    Place {
        col: usize,
        row: usize,
        size: Option<u8>,
    },
    UseEngine,
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        if QUIT_RE.is_match(trimmed) {
            return Ok(MoveInput::Quit);
        }

        let caps = MOVE_RE.captures(trimmed).ok_or_else(invalid)?;
        let col = caps[1].parse().map_err(|_| invalid())?;
        let row = caps[2].parse().map_err(|_| invalid())?;
        let size = match caps.get(3) {
            Some(size) => Some(size.as_str().parse().map_err(|_| invalid())?),
            None => None,
        };

        Ok(MoveInput::Place { col, row, size })
    }
}

/// Reads one line from stdin and parses it. End of input counts as quitting.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: e.to_string(),
        })?;

    if read == 0 {
        return Ok(MoveInput::Quit);
    }

    input.parse()
}
