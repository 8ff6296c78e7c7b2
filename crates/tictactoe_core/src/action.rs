//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A `Move` is created the
//! instant a placement is accepted and never changes afterwards.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row (0-2).
    pub row: usize,
    /// Column (0-2).
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate. Range is checked by the board, not here.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// A placed mark: where, and by whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
    player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(row: usize, col: usize, player: Player) -> Self {
        Self { row, col, player }
    }

    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the coordinate of this move.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord())
    }
}

/// Reason a placement request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate is off the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] Coord),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Coord),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is the computer's turn, not the caller's.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),
}
