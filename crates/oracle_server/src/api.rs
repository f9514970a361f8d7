//! Wire types for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oracle_tictactoe::{Algorithm, Analysis, Board, GameOver};
use serde::{Deserialize, Serialize};

/// Query string accepted by `POST /move`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveQuery {
    /// Overrides the server's default search algorithm.
    pub algorithm: Option<Algorithm>,
}

/// Body returned by `POST /move`.
///
/// Decided games are not an HTTP failure: they come back with status 200 and
/// an `error` message next to the submitted board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoveResponse {
    /// The optimal move for the player to move.
    Optimal(Analysis),
    /// The submitted game is already decided.
    GameOver {
        /// Human-readable outcome.
        error: String,
        /// The board as submitted.
        board: Board,
    },
}

impl MoveResponse {
    /// Builds the response for `board` from an analysis outcome.
    pub fn from_outcome(board: Board, outcome: Result<Analysis, GameOver>) -> Self {
        match outcome {
            Ok(analysis) => MoveResponse::Optimal(analysis),
            Err(game_over) => MoveResponse::GameOver {
                error: game_over.to_string(),
                board,
            },
        }
    }
}

/// Failure inside the service itself.
#[derive(Debug, Clone, derive_more::Display)]
pub enum ApiError {
    /// The search task panicked or was cancelled.
    #[display("Search task failed: {}", _0)]
    SearchFailed(String),
}

impl std::error::Error for ApiError {}

/// JSON body carried by [`ApiError`] responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error description.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
