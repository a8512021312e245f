//! Full-depth [Minimax] without any pruning.
//!
//! The computer is the maximizing side and the human is the minimizing one.
//! Scores are depth-biased (see [`Score`]), so among otherwise equivalent
//! continuations the engine picks the quickest win or the slowest loss.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::board::{Board, Outcome, Player, BOARD_SIZE, CENTER};
use crate::search::state::State;
use crate::search::{Candidate, Depth, Score, SearchResult, SearchStats};

/// Picks the best cell for `computer` to play on `board`. The human plays the
/// other mark.
///
/// Cells are tried in ascending order and a candidate only replaces the best
/// one so far if its score is strictly greater, so ties go to the lowest
/// cell. On the empty board all openings lead to a tie and the engine plays
/// cell 0.
///
/// The board must have at least one playable cell. If it does not, the
/// result falls back to [`CENTER`] with no candidates.
#[must_use]
pub fn choose_move(board: &Board, computer: Player) -> SearchResult {
    let start = Instant::now();
    let mut state = State::new(*board);
    let mut best_move = CENTER;
    let mut best_score = Score::MIN;
    let mut candidates = ArrayVec::new();

    for cell in 0..BOARD_SIZE {
        if !board.is_playable(cell) {
            continue;
        }
        state.push(cell, computer);
        let score = evaluate(&mut state, computer, 0);
        state.pop(cell);

        tracing::trace!(cell, %score, "evaluated candidate");
        candidates.push(Candidate { cell, score });
        if score > best_score {
            best_score = score;
            best_move = cell;
        }
    }
    debug_assert_eq!(state.board(), board);

    let stats = SearchStats {
        iterations: state.searched_nodes(),
        duration: start.elapsed(),
    };
    tracing::debug!(
        best_move,
        score = %best_score,
        iterations = stats.iterations,
        duration = ?stats.duration,
        "search finished"
    );
    SearchResult {
        best_move,
        score: best_score,
        candidates,
        stats,
    }
}

/// Scores the position on the scratch board, `depth` plies after the
/// computer's candidate move.
///
/// The human moves at even depths and keeps the minimum child score, the
/// computer moves at odd depths and keeps the maximum.
fn evaluate(state: &mut State, computer: Player, depth: Depth) -> Score {
    match state.board().check_victory() {
        Outcome::Victory(player) if player == computer => return Score::win(depth),
        Outcome::Victory(_) => return Score::loss(depth),
        Outcome::Tie => return Score::tie(depth),
        Outcome::Undecided => {},
    }

    let minimizing = depth % 2 == 0;
    let mover = if minimizing { !computer } else { computer };
    let moves: ArrayVec<usize, BOARD_SIZE> = state.board().empty_cells().collect();

    let mut best: Option<Score> = None;
    for cell in moves {
        state.push(cell, mover);
        let score = evaluate(state, computer, depth + 1);
        state.pop(cell);

        best = Some(match best {
            None => score,
            Some(best) if minimizing => best.min(score),
            Some(best) => best.max(score),
        });
    }
    // Unreachable: a full board is a tie.
    best.unwrap_or(Score::tie(depth))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn board(cells: &str) -> Board {
        Board::try_from(cells).unwrap()
    }

    #[test]
    fn opening_move() {
        let result = choose_move(&Board::new(), Player::One);
        // Every opening is a tie with perfect play, the first cell wins the
        // tie-break.
        assert_eq!(result.best_move, 0);
        assert_eq!(result.score, Score::tie(8));
        assert_eq!(result.candidates.len(), 9);
        for candidate in &result.candidates {
            assert_eq!(candidate.score, Score::tie(8), "cell {}", candidate.cell);
        }
        // At least one visit per possible game.
        assert!(result.stats.iterations > 255_168);
    }

    #[test]
    fn reply_to_center() {
        let result = choose_move(&board(".../.1./..."), Player::Two);
        assert_eq!(result.best_move, 0);
        assert_eq!(result.score, Score::tie(7));
        // Answering the center with an edge loses.
        let edge = result.candidates.iter().find(|c| c.cell == 1).unwrap();
        assert!(edge.score.is_loss());
        assert_eq!(result.candidates.len(), 8);
    }

    #[test]
    fn takes_the_win() {
        let result = choose_move(&board("11./22./..."), Player::One);
        assert_eq!(result.best_move, 2);
        assert_eq!(result.score, Score::win(0));
    }

    #[test]
    fn blocks_the_opponent() {
        let result = choose_move(&board("11./.2./..."), Player::Two);
        assert_eq!(result.best_move, 2);
        assert!(!result.score.is_loss());
        // Any other move loses immediately after.
        for candidate in result.candidates.iter().filter(|c| c.cell != 2) {
            assert_eq!(candidate.score, Score::loss(1), "cell {}", candidate.cell);
        }
    }

    #[test]
    fn winning_beats_blocking() {
        let result = choose_move(&board("11./22./1.."), Player::Two);
        assert_eq!(result.best_move, 5);
        assert_eq!(result.score, Score::win(0));
    }

    #[test]
    fn prefers_quicker_win() {
        // Cell 1 creates a fork that wins two plies later, cell 5 wins right
        // away.
        let result = choose_move(&board("2../11./..2"), Player::One);
        assert_eq!(result.best_move, 5);
        assert_eq!(result.score, Score::win(0));
        let fork = result.candidates.iter().find(|c| c.cell == 1).unwrap();
        assert_eq!(fork.score, Score::win(2));
    }

    #[test]
    fn last_cell() {
        let result = choose_move(&board("121/112/2.2"), Player::One);
        assert_eq!(result.best_move, 7);
        assert_eq!(result.score, Score::tie(0));
        assert_eq!(result.stats.iterations, 1);
        assert_eq!(
            result.candidates.as_slice(),
            &[Candidate {
                cell: 7,
                score: Score::tie(0)
            }]
        );
    }

    #[test]
    fn two_cells_left() {
        // Either move ends in a tie on the full board.
        let result = choose_move(&board("121/112/..2"), Player::Two);
        assert_eq!(result.stats.iterations, 4);
        assert_eq!(result.best_move, 6);
        assert_eq!(result.score, Score::tie(1));
    }

    #[test]
    fn full_board_falls_back_to_center() {
        let result = choose_move(&board("121/112/212"), Player::One);
        assert_eq!(result.best_move, CENTER);
        assert_eq!(result.score, Score::MIN);
        assert!(result.candidates.is_empty());
        assert_eq!(result.stats.iterations, 0);
    }
}
