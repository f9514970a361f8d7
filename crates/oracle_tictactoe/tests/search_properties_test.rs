//! Whole-tree properties of the search engine.

use oracle_tictactoe::rules::{current_player, is_full, winner};
use oracle_tictactoe::search::{DRAW_SCORE, WIN_SCORE, alpha_beta, minimax};
use oracle_tictactoe::{Board, Cell, SearchStats};
use std::collections::HashSet;

/// Every non-terminal position reachable by alternating play from the empty board.
fn reachable_positions() -> Vec<Board> {
    fn walk(board: Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) || winner(&board).is_some() || is_full(&board) {
            return;
        }
        out.push(board);
        let player = current_player(&board);
        for coord in board.vacant_cells() {
            walk(board.with_mark(coord, player), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_position_count() {
    assert_eq!(reachable_positions().len(), 4_520);
}

#[test]
fn test_alpha_beta_matches_minimax_everywhere() {
    for board in reachable_positions() {
        let player = current_player(&board);

        let mut scratch = board;
        let mut full = SearchStats::default();
        let expected = minimax(&mut scratch, player, &mut full);
        assert_eq!(scratch, board, "minimax left marks on\n{board}");

        let mut pruned = SearchStats::default();
        let actual = alpha_beta(&mut scratch, player, &mut pruned);
        assert_eq!(scratch, board, "alpha-beta left marks on\n{board}");

        assert_eq!(actual, expected, "variants disagree on\n{board}");
        assert!(
            pruned.nodes_visited() <= full.nodes_visited(),
            "alpha-beta visited more nodes on\n{board}"
        );
    }
}

#[test]
fn test_scores_and_moves_are_legal() {
    for board in reachable_positions() {
        let player = current_player(&board);
        let mut scratch = board;
        let (score, best) = alpha_beta(&mut scratch, player, &mut SearchStats::default());

        assert!([-10, 0, 10].contains(&score), "score {score} on\n{board}");

        let best = best.expect("non-terminal position must yield a move");
        let changed = best.diff(&board);
        assert_eq!(changed.len(), 1, "move changed {changed:?} on\n{board}");
        assert_eq!(board[changed[0]], Cell::Empty);
        assert_eq!(best[changed[0]], Cell::Occupied(player));
    }
}

#[test]
fn test_available_win_is_never_given_up() {
    // Scores carry no depth discount, so an earlier cell that forces a later
    // win ties with the immediate win and is kept by row-major order.
    let mut immediate = 0;
    for board in reachable_positions() {
        let player = current_player(&board);
        let has_winning_cell = board
            .vacant_cells()
            .any(|coord| winner(&board.with_mark(coord, player)) == Some(player));
        if !has_winning_cell {
            continue;
        }

        let mut scratch = board;
        let (score, best) = minimax(&mut scratch, player, &mut SearchStats::default());
        assert_eq!(score, WIN_SCORE, "missed a win on\n{board}");

        let mut best = best.expect("non-terminal position must yield a move");
        if winner(&best) == Some(player) {
            immediate += 1;
            continue;
        }
        let (follow_up, _) = minimax(&mut best, player, &mut SearchStats::default());
        assert_eq!(follow_up, WIN_SCORE, "chosen move lets the win slip on\n{board}");
    }
    assert_eq!(immediate, 1_966);
}

#[test]
fn test_empty_board_is_a_draw() {
    let mut board = Board::new();
    let player = current_player(&board);

    let mut full = SearchStats::default();
    let (score, best) = minimax(&mut board, player, &mut full);
    assert_eq!(score, DRAW_SCORE);
    assert_eq!(full.nodes_visited(), 549_946);
    // Every opening draws, so the first cell is kept.
    assert_eq!(best, Some(Board::from_rows([["X", "", ""], ["", "", ""], ["", "", ""]]).unwrap()));

    let mut pruned = SearchStats::default();
    let (pruned_score, pruned_best) = alpha_beta(&mut board, player, &mut pruned);
    assert_eq!(pruned_score, DRAW_SCORE);
    assert_eq!(pruned_best, best);
    assert_eq!(pruned.nodes_visited(), 18_297);
    assert!(pruned.nodes_visited() < full.nodes_visited());

    assert_eq!(board, Board::new());
}
