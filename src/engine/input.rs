//! Parsing of the lines typed by the human player.

use std::error::Error;
use std::fmt;

use crate::board::{Board, BOARD_SIZE};

/// Reasons to reject a line typed by the human. All of them are recovered
/// from by asking again.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum InputError {
    /// The move is not an integer.
    NotANumber,
    /// The move is an integer but there is no such cell.
    OutOfRange(i64),
    /// The cell (1-indexed) already has a mark.
    Occupied(usize),
    /// The answer to the replay question is neither yes nor no.
    InvalidAnswer,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(
                f,
                "ERROR: invalid input. Enter the number of a cell from 1 to {BOARD_SIZE}"
            ),
            Self::OutOfRange(cell) => write!(f, "Invalid move: there is no cell {cell}."),
            Self::Occupied(cell) => write!(f, "Invalid move: cell {cell} is already taken."),
            Self::InvalidAnswer => write!(f, "ERROR: invalid input."),
        }
    }
}

impl Error for InputError {}

/// Parses a 1-indexed cell number and checks that it can be played. Returns
/// the 0-indexed cell. Anything after the first word is ignored.
pub(super) fn parse_move(line: &str, board: &Board) -> Result<usize, InputError> {
    let token = line.split_whitespace().next().unwrap_or_default();
    let number: i64 = token.parse().map_err(|_| InputError::NotANumber)?;
    let cell = number
        .checked_sub(1)
        .and_then(|cell| usize::try_from(cell).ok())
        .filter(|cell| *cell < BOARD_SIZE)
        .ok_or(InputError::OutOfRange(number))?;
    if !board.is_playable(cell) {
        return Err(InputError::Occupied(cell + 1));
    }
    Ok(cell)
}

/// Answer to "Do you want to play again?".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum Replay {
    Yes,
    No,
}

/// Only the first character matters and the case is ignored: "yes", "Y" and
/// "yep" all mean yes.
pub(super) fn parse_replay(line: &str) -> Result<Replay, InputError> {
    match line.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Ok(Replay::Yes),
        Some('n') => Ok(Replay::No),
        _ => Err(InputError::InvalidAnswer),
    }
}
