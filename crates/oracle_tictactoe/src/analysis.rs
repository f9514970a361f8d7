//! Request-level policy: refuse decided games, otherwise search.

use crate::rules::{current_player, status};
use crate::search::{Algorithm, search};
use crate::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The game on the submitted board is already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameOver {
    /// A player has three in a row.
    #[display("Game is already over. Winner: {}", _0)]
    Won(Player),
    /// The board is full with no winner.
    #[display("Game is already over. It's a draw.")]
    Draw,
}

impl std::error::Error for GameOver {}

/// Optimal move for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Player whose move was searched.
    pub player: Player,
    /// Board after the chosen move.
    pub optimal_move: Board,
    /// Minimax score from `player`'s point of view.
    pub score: i32,
    /// Positions examined by the search.
    pub iterations: u64,
}

/// Finds the optimal move on `board`.
///
/// The player to move is inferred from mark counts. Decided games are
/// reported as [`GameOver`] without searching.
///
/// ```
/// use oracle_tictactoe::{Algorithm, Board, Player, analyze};
///
/// let board = Board::from_rows([["X", "O", "X"], ["O", "X", "O"], ["", "", ""]]).unwrap();
/// let analysis = analyze(&board, Algorithm::AlphaBeta).unwrap();
/// assert_eq!(analysis.player, Player::X);
/// assert_eq!(analysis.score, 10);
/// ```
#[instrument(skip(board), fields(algorithm = %algorithm))]
pub fn analyze(board: &Board, algorithm: Algorithm) -> Result<Analysis, GameOver> {
    match status(board) {
        GameStatus::Won(player) => return Err(GameOver::Won(player)),
        GameStatus::Draw => return Err(GameOver::Draw),
        GameStatus::InProgress => {}
    }

    let player = current_player(board);
    let result = search(board, player, algorithm);
    // An in-progress board has an empty cell, and every score beats the
    // starting bound, so the root always records a move.
    let Some(optimal_move) = result.best_move else {
        unreachable!("no move found on in-progress board\n{board}");
    };

    info!(
        player = %player,
        score = result.score,
        iterations = result.nodes_visited,
        "Optimal move found"
    );

    Ok(Analysis {
        player,
        optimal_move,
        score: result.score,
        iterations: result.nodes_visited,
    })
}
