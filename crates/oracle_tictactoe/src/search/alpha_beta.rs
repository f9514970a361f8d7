//! Minimax with alpha-beta pruning.

use super::placement::Placement;
use super::{SearchStats, improves, terminal_score, worst_score};
use crate::rules::current_player;
use crate::{Board, Player};

/// Alpha-beta pruned minimax search from `maximizing`'s point of view.
///
/// Same contract as [`minimax`](super::minimax): the score and chosen move are
/// identical, only fewer nodes are visited.
pub fn alpha_beta(
    board: &mut Board,
    maximizing: Player,
    stats: &mut SearchStats,
) -> (i32, Option<Board>) {
    window(board, maximizing, i32::MIN, i32::MAX, stats)
}

/// Searches `board` inside the `(alpha, beta)` window.
///
/// `alpha` is the score the maximizer can already guarantee, `beta` the score
/// the minimizer can already guarantee. Once they cross the remaining siblings
/// cannot affect the parent's choice and are skipped.
fn window(
    board: &mut Board,
    maximizing: Player,
    mut alpha: i32,
    mut beta: i32,
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

        {
            let mut placement = Placement::new(board, coord, player);
            let (score, _) = window(placement.board_mut(), maximizing, alpha, beta, stats);

            if improves(is_maximizing, score, best_score) {
                best_score = score;
                best_move = Some(placement.snapshot());
            }
        }

        if is_maximizing {
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        } else {
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{WIN_SCORE, minimax};

    #[test]
    fn test_anti_diagonal_finish_prunes() {
        let mut board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["", "", ""]]).unwrap();
        let before = board;
        let mut stats = SearchStats::default();

        let (score, best) = alpha_beta(&mut board, Player::X, &mut stats);
        assert_eq!(score, WIN_SCORE);
        assert_eq!(best, Some(before.with_mark((2, 0), Player::X)));
        assert_eq!(stats.nodes_visited(), 6);
        assert_eq!(board, before);
    }

    #[test]
    fn test_matches_minimax_after_opening() {
        let mut board = Board::from_rows([["X", "", ""], ["", "", ""], ["", "", ""]]).unwrap();

        let mut full = SearchStats::default();
        let expected = minimax(&mut board, Player::O, &mut full);

        let mut pruned = SearchStats::default();
        let actual = alpha_beta(&mut board, Player::O, &mut pruned);

        assert_eq!(actual, expected);
        assert_eq!(full.nodes_visited(), 59_705);
        assert_eq!(pruned.nodes_visited(), 2_338);
    }

    #[test]
    fn test_pruned_node_restores_board() {
        // X wins at once; the remaining siblings at the root are never pruned,
        // but inner nodes cut off and must still undo their marks.
        let mut board = Board::from_rows([["X", "X", ""], ["O", "O", ""], ["", "", ""]]).unwrap();
        let before = board;
        let mut stats = SearchStats::default();

        let (score, best) = alpha_beta(&mut board, Player::X, &mut stats);
        assert_eq!(score, WIN_SCORE);
        assert_eq!(best, Some(before.with_mark((0, 2), Player::X)));
        assert_eq!(stats.nodes_visited(), 36);
        assert_eq!(board, before);
    }
}
