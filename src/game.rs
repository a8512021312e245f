//! State of a single game as tracked by the driver: the board, which mark the
//! computer plays, whose turn it is and who won.

use std::fmt;

use rand::Rng;

use crate::board::{Board, Outcome, Player};
use crate::search::{self, SearchResult};

/// Side of the game from the program's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Side {
    Computer,
    Human,
}

/// Assignment of the two marks to the computer and the human.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Roles {
    computer: Player,
}

impl Roles {
    /// The computer plays `computer` and the human plays the other mark.
    #[must_use]
    pub const fn new(computer: Player) -> Self {
        Self { computer }
    }

    /// Flips a fair coin to decide which mark the computer plays. Since mark
    /// [`Player::One`] moves first, this also decides who starts.
    pub fn draw(rng: &mut impl Rng) -> Self {
        let computer = if rng.gen_bool(0.5) {
            Player::One
        } else {
            Player::Two
        };
        Self { computer }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn computer(self) -> Player {
        self.computer
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn human(self) -> Player {
        !self.computer
    }

    /// Returns the side playing given mark.
    #[must_use]
    pub fn side(self, player: Player) -> Side {
        if player == self.computer {
            Side::Computer
        } else {
            Side::Human
        }
    }
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Winner {
    Tie,
    Computer,
    Human,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tie => write!(f, "The game is tied: nobody won."),
            Self::Computer => write!(f, "The computer won the game."),
            Self::Human => write!(f, "You won the game."),
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    roles: Roles,
    to_move: Player,
    winner: Option<Winner>,
}

impl GameState {
    /// Starts a game on the empty board with given roles.
    #[must_use]
    pub const fn new(roles: Roles) -> Self {
        Self {
            board: Board::new(),
            roles,
            to_move: Player::One,
            winner: None,
        }
    }

    /// Starts a game with roles drawn from `rng`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(Roles::draw(rng))
    }

    /// Clears the board and draws the roles again.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        *self = Self::random(rng);
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn roles(&self) -> Roles {
        self.roles
    }

    /// Mark of the player whose turn it is.
    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.roles.side(self.to_move)
    }

    /// Set once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Runs the search for the computer's next move. Does not apply it.
    ///
    /// The game must not be over.
    #[must_use]
    pub fn computer_move(&self) -> SearchResult {
        debug_assert!(!self.is_over(), "Can't search a finished game");
        search::choose_move(&self.board, self.roles.computer())
    }

    /// Plays the cell for the player whose turn it is, then checks whether the
    /// game ended and passes the turn.
    ///
    /// The game must not be over and the cell must be playable.
    pub fn apply(&mut self, cell: usize) -> Option<Winner> {
        debug_assert!(!self.is_over(), "Can't play in a finished game");
        self.board.place(cell, self.to_move);
        tracing::debug!(cell, player = %self.to_move, "move applied");

        self.winner = match self.board.check_victory() {
            Outcome::Undecided => None,
            Outcome::Tie => Some(Winner::Tie),
            Outcome::Victory(player) => Some(match self.roles.side(player) {
                Side::Computer => Winner::Computer,
                Side::Human => Winner::Human,
            }),
        };
        self.to_move = !self.to_move;
        self.winner
    }
}
