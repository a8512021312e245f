use crate::board::{Board, Player};

/// Scratch space shared by the whole search: a single board that moves are
/// placed on and removed from, and the number of visited nodes.
pub(super) struct State {
    board: Board,
    searched_nodes: u64,
}

impl State {
    pub(super) const fn new(root: Board) -> Self {
        Self {
            board: root,
            searched_nodes: 0,
        }
    }

    /// Places the mark and counts the resulting position as visited. Every
    /// call has to be paired with [`State::pop`] for the same cell.
    pub(super) fn push(&mut self, cell: usize, player: Player) {
        self.board.place(cell, player);
        self.searched_nodes += 1;
    }

    pub(super) fn pop(&mut self, cell: usize) {
        self.board.clear(cell);
    }

    #[must_use]
    pub(super) const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub(super) const fn searched_nodes(&self) -> u64 {
        self.searched_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop() {
        let root = Board::try_from("1../.2./...").unwrap();
        let mut state = State::new(root);
        assert_eq!(state.searched_nodes(), 0);

        state.push(8, Player::One);
        assert_eq!(state.board().get(8), Some(Player::One));
        state.push(7, Player::Two);
        assert_eq!(state.searched_nodes(), 2);

        state.pop(7);
        state.pop(8);
        assert_eq!(state.board(), &root);
        // Undoing a move does not "unvisit" the node.
        assert_eq!(state.searched_nodes(), 2);
    }
}
