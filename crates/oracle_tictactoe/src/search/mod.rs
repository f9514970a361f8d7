//! Exhaustive game-tree search.
//!
//! Two variants share one contract: [`minimax`] expands every continuation,
//! [`alpha_beta`] skips subtrees that cannot change the result. Both score
//! positions from a fixed maximizing player's point of view, +10 for a win,
//! -10 for a loss and 0 for a draw, with no discount for depth. Among equally
//! scored moves the first empty cell in row-major order is chosen.

mod alpha_beta;
mod minimax;
mod placement;

pub use alpha_beta::alpha_beta;
pub use minimax::minimax;

use crate::rules::{is_full, winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by the maximizing player.
pub const WIN_SCORE: i32 = 10;
/// Score of a position won by the opponent.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Move-selection algorithm.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Algorithm {
    /// Plain minimax over the full game tree.
    #[default]
    #[serde(rename = "minimax")]
    #[strum(to_string = "minimax")]
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[serde(rename = "alpha-beta", alias = "alpha_beta")]
    #[strum(to_string = "alpha-beta", serialize = "alpha_beta")]
    AlphaBeta,
}

/// Node counter for one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes_visited: u64,
}

impl SearchStats {
    /// Number of positions examined so far, the root included.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    fn visit(&mut self) {
        self.nodes_visited += 1;
    }
}

/// Outcome of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best attainable score for the maximizing player.
    pub score: i32,
    /// Board after the chosen move; `None` when the input was terminal.
    pub best_move: Option<Board>,
    /// Positions examined.
    pub nodes_visited: u64,
}

/// Searches `board` for the best move for `maximizing` with `algorithm`.
///
/// The search works on a private copy, so `board` is never touched.
#[instrument(level = "debug", skip(board))]
pub fn search(board: &Board, maximizing: Player, algorithm: Algorithm) -> SearchResult {
    let mut scratch = *board;
    let mut stats = SearchStats::default();

    let (score, best_move) = match algorithm {
        Algorithm::Minimax => minimax(&mut scratch, maximizing, &mut stats),
        Algorithm::AlphaBeta => alpha_beta(&mut scratch, maximizing, &mut stats),
    };

    debug!(
        score,
        nodes_visited = stats.nodes_visited(),
        has_move = best_move.is_some(),
        "Search finished"
    );

    SearchResult {
        score,
        best_move,
        nodes_visited: stats.nodes_visited(),
    }
}

/// Score of a finished game, or `None` while play continues.
fn terminal_score(board: &Board, maximizing: Player) -> Option<i32> {
    if let Some(player) = winner(board) {
        return Some(if player == maximizing {
            WIN_SCORE
        } else {
            LOSS_SCORE
        });
    }
    is_full(board).then_some(DRAW_SCORE)
}

/// Starting best score: any real score beats it.
fn worst_score(is_maximizing: bool) -> i32 {
    if is_maximizing { i32::MIN } else { i32::MAX }
}

/// Strict comparison, so earlier cells keep ties.
fn improves(is_maximizing: bool, score: i32, best: i32) -> bool {
    if is_maximizing {
        score > best
    } else {
        score < best
    }
}
