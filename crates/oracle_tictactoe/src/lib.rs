//! Optimal-move oracle for 3x3 tic-tac-toe.
//!
//! Pure game logic with no I/O:
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`]
//! - **Rules**: win and draw detection, turn inference ([`rules`])
//! - **Search**: exhaustive minimax and alpha-beta ([`search`](mod@search))
//! - **Analysis**: the request-level policy in front of the search ([`analyze`])
//!
//! # Example
//!
//! ```
//! use oracle_tictactoe::{Algorithm, Board, analyze};
//!
//! let analysis = analyze(&Board::new(), Algorithm::AlphaBeta).unwrap();
//! assert_eq!(analysis.score, 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
pub mod rules;
pub mod search;
mod types;

pub use analysis::{Analysis, GameOver, analyze};
pub use search::{Algorithm, SearchResult, SearchStats, search};
pub use types::{Board, Cell, Coord, GameStatus, InvalidCell, Player};
