//! Move selection through exhaustive [Minimax] search.
//!
//! Every call explores the complete game tree below the current position:
//! there is no pruning, no move ordering and nothing is cached between calls.
//! Tic-tac-toe is small enough for this to take a few milliseconds even from
//! the empty board.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::board::BOARD_SIZE;

mod minimax;
mod score;
mod state;

pub use minimax::choose_move;
pub use score::Score;

/// Search depth in plies, counted from the position right after the
/// candidate move.
pub type Depth = u8;

/// Diagnostics collected during a single [`choose_move`] call. They have no
/// effect on the chosen move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of positions visited.
    pub iterations: u64,
    /// Wall-clock time spent in the search.
    pub duration: Duration,
}

/// A playable cell and the minimax score of moving there.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    #[allow(missing_docs)]
    pub cell: usize,
    #[allow(missing_docs)]
    pub score: Score,
}

/// Outcome of [`choose_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Cell the computer should play.
    pub best_move: usize,
    /// Score of the best move, [`Score::MIN`] if there were no candidates.
    pub score: Score,
    /// Every evaluated move in ascending cell order.
    pub candidates: ArrayVec<Candidate, BOARD_SIZE>,
    #[allow(missing_docs)]
    pub stats: SearchStats,
}
