//! Unpruned minimax.

use super::placement::Placement;
use super::{SearchStats, improves, terminal_score, worst_score};
use crate::rules::current_player;
use crate::{Board, Player};

/// Full-width minimax search from `maximizing`'s point of view.
///
/// Returns the best attainable score and the board after the chosen move, or
/// no move when `board` is terminal. Every call, the root included, counts
/// one node in `stats`. `board` is mutated during the search and is back to
/// its original contents on return.
pub fn minimax(
    board: &mut Board,
    maximizing: Player,
    stats: &mut SearchStats,
) -> (i32, Option<Board>) {
    stats.visit();

    if let Some(score) = terminal_score(board, maximizing) {
        return (score, None);
    }

    let player = current_player(board);
    let is_maximizing = player == maximizing;

    let mut best_score = worst_score(is_maximizing);
    let mut best_move = None;

    for coord in Board::COORDS {
        if !board.is_vacant(coord) {
            continue;
        }

        let mut placement = Placement::new(board, coord, player);
        let (score, _) = minimax(placement.board_mut(), maximizing, stats);

        if improves(is_maximizing, score, best_score) {
            best_score = score;
            best_move = Some(placement.snapshot());
        }
    }

    (best_score, best_move)
}
