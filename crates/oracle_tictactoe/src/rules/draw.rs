//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Cell};

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board
        .cells()
        .iter()
        .flatten()
        .all(|cell| *cell != Cell::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["O", "X", ""]]).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]).unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows([["X", "X", "X"], ["O", "O", "X"], ["X", "O", "O"]]).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
