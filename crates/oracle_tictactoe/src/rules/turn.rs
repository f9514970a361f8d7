//! Turn inference from move parity.
//!
//! There is no explicit turn state: the player to move is derived from the
//! marks on the board, assuming strictly alternating play that started with X.
//! Boards that violate this still get a deterministic answer.

use crate::{Board, Player};

/// Returns the player to move: X when X has made no more moves than O.
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_x() {
        assert_eq!(current_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_equal_counts_is_x() {
        let board = Board::from_rows([["X", "O", ""], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_one_more_x_is_o() {
        let board = Board::from_rows([["X", "O", "X"], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(current_player(&board), Player::O);
    }

    #[test]
    fn test_skewed_counts_are_not_rejected() {
        let board = Board::from_rows([["O", "O", ""], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(current_player(&board), Player::X);

        let board = Board::from_rows([["X", "X", "X"], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(current_player(&board), Player::O);
    }
}
