use std::fmt;

use crate::search::Depth;

/// Minimax score of a position from the computer's perspective.
///
/// Terminal positions are scored by their outcome and by the depth at which
/// the search reached them, so that quicker wins and slower losses are
/// preferred. The ranges of the three outcomes never overlap:
///
/// | Outcome | Score          | Range        |
/// |---------|----------------|--------------|
/// | Win     | `21 - depth`   | `[13, 21]`   |
/// | Tie     | `10 - depth`   | `[2, 10]`    |
/// | Loss    | `depth - 11`   | `[-11, -3]`  |
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score {
    value: i32,
}

impl Score {
    /// Lower than any score the search can produce. Used as the initial best
    /// score when picking a move.
    pub const MIN: Self = Self { value: -100 };

    const LOSS_OFFSET: i32 = 11;
    const TIE_OFFSET: i32 = 10;
    const WIN_OFFSET: i32 = 21;

    /// The computer completed a line `depth` plies after the candidate move.
    #[must_use]
    pub const fn win(depth: Depth) -> Self {
        Self {
            value: Self::WIN_OFFSET - depth as i32,
        }
    }

    /// The human completed a line `depth` plies after the candidate move.
    #[must_use]
    pub const fn loss(depth: Depth) -> Self {
        Self {
            value: depth as i32 - Self::LOSS_OFFSET,
        }
    }

    /// The board was filled `depth` plies after the candidate move.
    #[must_use]
    pub const fn tie(depth: Depth) -> Self {
        Self {
            value: Self::TIE_OFFSET - depth as i32,
        }
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Returns `true` if the computer wins with best play.
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.value > Self::TIE_OFFSET
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_loss(self) -> bool {
        self.value < 0
    }
}

impl fmt::Display for Score {
    /// Prints the raw value followed by the outcome it stands for.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.is_win() {
            "win"
        } else if self.is_loss() {
            "loss"
        } else {
            "tie"
        };
        write!(f, "{} ({outcome})", self.value)
    }
}
