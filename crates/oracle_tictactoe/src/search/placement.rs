//! Scoped mark placement.

use crate::{Board, Cell, Coord, Player};

/// A mark placed on a borrowed board for the duration of a subtree search.
///
/// The cell is restored to [`Cell::Empty`] when the guard drops, including on
/// early exits from a pruned node.
pub(crate) struct Placement<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> Placement<'a> {
    /// Marks `coord` for `player`. The cell must be empty.
    pub(crate) fn new(board: &'a mut Board, coord: Coord, player: Player) -> Self {
        debug_assert!(board.is_vacant(coord), "placing on occupied cell {coord:?}");
        board[coord] = Cell::Occupied(player);
        Self { board, coord }
    }

    /// The board with the mark in place.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        self.board
    }

    /// Copy of the board with the mark in place.
    pub(crate) fn snapshot(&self) -> Board {
        *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board[self.coord] = Cell::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restores_on_drop() {
        let mut board = Board::new();
        {
            let placement = Placement::new(&mut board, (1, 2), Player::O);
            assert_eq!(placement.snapshot()[(1, 2)], Cell::Occupied(Player::O));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_restores_on_early_exit() {
        fn place_and_bail(board: &mut Board) -> Option<()> {
            let _placement = Placement::new(board, (0, 0), Player::X);
            None?;
            Some(())
        }

        let mut board = Board::new();
        assert_eq!(place_and_bail(&mut board), None);
        assert_eq!(board, Board::new());
    }
}
