//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Coord, Player};

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[Coord; 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line in [`WIN_LINES`] holding three equal,
/// non-empty cells. Only unreachable boards can have more than one such line.
pub fn winner(board: &Board) -> Option<Player> {
    WIN_LINES.iter().find_map(|[a, b, c]| match board[*a] {
        Cell::Occupied(player) if board[*b] == board[*a] && board[*c] == board[*a] => {
            Some(player)
        }
        _ => None,
    })
}
