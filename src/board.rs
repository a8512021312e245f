//! Board representation and victory detection.
//!
//! The board is a mailbox of 9 cells indexed row-major from the top-left
//! corner:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//!
//! Players are identified by the marks they put on the board (`1` and `2`),
//! not by their role in the game: which of them is played by the computer is
//! decided by [`crate::game::Roles`].

use std::fmt;
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: usize = 3;
#[allow(missing_docs)]
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;
/// Index of the central cell.
pub const CENTER: usize = BOARD_SIZE / 2;

/// Every line that wins the game when filled with the marks of a single
/// player, in the order [`Board::check_victory`] scans them: diagonals, then
/// rows, then columns.
#[rustfmt::skip]
pub const LINES: [[usize; BOARD_WIDTH]; 8] = [
    // Diagonals.
    [0, 4, 8], [2, 4, 6],
    // Rows.
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    // Columns.
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
];

/// Cell numbering shown to the human player. Cells are 1-indexed in the user
/// interface and 0-indexed everywhere else.
pub const LEGEND: &str = "1 | 2 | 3\n---------\n4 | 5 | 6\n---------\n7 | 8 | 9";

const ROW_SEPARATOR: &str = "---------";

/// One of the two marks placed on the board. The player with mark `One`
/// always moves first.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl TryFrom<char> for Player {
    type Error = anyhow::Error;

    fn try_from(mark: char) -> anyhow::Result<Self> {
        match mark {
            '1' => Ok(Self::One),
            '2' => Ok(Self::Two),
            _ => bail!("mark should be '1' or '2', got '{mark}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// State of the game as seen from the board alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    Undecided,
    /// No line is complete and the board is full.
    Tie,
    /// The player completed a line.
    Victory(Player),
}

impl Outcome {
    /// Returns `true` if no more moves can be played.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

/// 3×3 tic-tac-toe board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Returns the mark in given cell, if any.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside of the board.
    #[must_use]
    pub const fn get(&self, cell: usize) -> Option<Player> {
        self.cells[cell]
    }

    /// Returns `true` iff `cell` is within the board and not occupied yet.
    #[must_use]
    pub fn is_playable(&self, cell: usize) -> bool {
        cell < BOARD_SIZE && self.cells[cell].is_none()
    }

    /// Puts the player's mark in an empty cell.
    pub fn place(&mut self, cell: usize, player: Player) {
        debug_assert!(
            self.is_playable(cell),
            "Can't place a mark on occupied cell {cell}"
        );
        self.cells[cell] = Some(player);
    }

    /// Removes the mark from an occupied cell.
    pub fn clear(&mut self, cell: usize) {
        debug_assert!(
            self.cells[cell].is_some(),
            "Can't clear cell {cell} that is already empty"
        );
        self.cells[cell] = None;
    }

    /// Iterates over the playable cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, mark)| mark.is_none().then_some(cell))
    }

    /// Number of marks on the board, which is the number of moves played so
    /// far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|mark| mark.is_some()).count()
    }

    /// Returns `true` if there are no empty cells left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Scans all [`LINES`] and reports the first one completed by a single
    /// player. Works on any board, including the ones that can not be reached
    /// in a legal game.
    #[must_use]
    pub fn check_victory(&self) -> Outcome {
        for [a, b, c] in LINES {
            if let Some(player) = self.cells[a] {
                if self.cells[b] == Some(player) && self.cells[c] == Some(player) {
                    return Outcome::Victory(player);
                }
            }
        }
        if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::Undecided
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the board from 9 cell symbols in row-major order: `.` for empty
    /// cells, `1` and `2` for the marks. Whitespace and `/` row separators are
    /// ignored, so `"1.2/.1./..2"` and `"1.2.1...2"` are the same board.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let symbols: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if symbols.len() != BOARD_SIZE {
            bail!("expected {BOARD_SIZE} cells, got {}", symbols.len());
        }
        let mut board = Self::new();
        for (cell, symbol) in symbols.into_iter().enumerate() {
            if symbol != '.' {
                board.cells[cell] = Some(Player::try_from(symbol)?);
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Prints the rows separated by dashes. Empty cells are blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.chunks(BOARD_WIDTH).map(|row| {
            row.iter()
                .map(|mark| mark.map_or_else(|| " ".to_string(), |player| player.to_string()))
                .join(" | ")
        });
        write!(f, "{}", rows.format(&format!("\n{ROW_SEPARATOR}\n")))
    }
}
