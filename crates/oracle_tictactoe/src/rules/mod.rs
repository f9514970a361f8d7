//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot: win and draw detection,
//! and inferring whose turn it is from the marks already placed.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::current_player;
pub use win::{WIN_LINES, winner};

use crate::{Board, GameStatus};

/// Classifies a position as won, drawn or still in progress.
///
/// A winner takes precedence over a full board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
