//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Board coordinate as `(row, column)`, both in `0..3`.
pub type Coord = (usize, usize);

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
///
/// On the wire a cell is one of the strings `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the wire symbol for this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Player::X) => "X",
            Cell::Occupied(Player::O) => "O",
        }
    }

    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Error for cell symbols other than `""`, `"X"` and `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid cell {:?}: expected \"\", \"X\" or \"O\"", _0)]
pub struct InvalidCell(
    /// The rejected symbol.
    pub String,
);

impl std::error::Error for InvalidCell {}

impl std::str::FromStr for Cell {
    type Err = InvalidCell;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Cell::Empty),
            "X" => Ok(Cell::Occupied(Player::X)),
            "O" => Ok(Cell::Occupied(Player::O)),
            other => Err(InvalidCell(other.to_string())),
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = InvalidCell;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.symbol().to_string()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Occupied(player)
    }
}

/// 3x3 tic-tac-toe board, serialized as three rows of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Every coordinate in row-major order.
    pub const COORDS: [Coord; 9] = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from its rows.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Parses a board from rows of wire symbols.
    ///
    /// ```
    /// use oracle_tictactoe::Board;
    ///
    /// let board = Board::from_rows([["X", "", ""], ["", "O", ""], ["", "", ""]]).unwrap();
    /// assert_eq!(board.count_empty(), 7);
    /// ```
    pub fn from_rows(rows: [[&str; 3]; 3]) -> Result<Self, InvalidCell> {
        let mut board = Self::new();
        for (coord, symbol) in Self::COORDS
            .iter()
            .zip(rows.iter().flat_map(|row| row.iter()))
        {
            board[*coord] = symbol.parse()?;
        }
        Ok(board)
    }

    /// Gets the cell at the given position, `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Checks if the cell at `coord` is empty.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self[coord] == Cell::Empty
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.iter().filter(|cell| cell.player() == Some(player)).count()
    }

    /// Counts empty cells.
    pub fn count_empty(&self) -> usize {
        self.iter().filter(|cell| **cell == Cell::Empty).count()
    }

    /// Coordinates of empty cells, in row-major order.
    pub fn vacant_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::COORDS
            .into_iter()
            .filter(move |coord| self.is_vacant(*coord))
    }

    /// Returns a copy of this board with `player` marked at `coord`.
    pub fn with_mark(&self, coord: Coord, player: Player) -> Self {
        let mut next = *self;
        next[coord] = Cell::Occupied(player);
        next
    }

    /// Coordinates at which `self` and `other` hold different cells.
    pub fn diff(&self, other: &Board) -> Vec<Coord> {
        Self::COORDS
            .into_iter()
            .filter(|coord| self[*coord] != other[*coord])
            .collect()
    }

    fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord) -> &Cell {
        &self.cells[row][col]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, (row, col): Coord) -> &mut Cell {
        &mut self.cells[row][col]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => ".",
                    other => other.symbol(),
                };
                f.write_str(symbol)?;
                if c < 2 {
                    f.write_str("|")?;
                }
            }
            if r < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}
